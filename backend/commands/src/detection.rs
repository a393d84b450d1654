/// Command tokenizer: keyword split and argument extraction.
use std::sync::LazyLock;

use regex::Regex;

use crate::registry::CommandRegistry;
use crate::types::{AttributeIncrease, CommandInvocation};

static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w{3})\+ (\d+)$").unwrap());

/// Attribute codes in status-id order.
pub const ATTRIBUTES: [&str; 6] = ["str", "agi", "vit", "int", "dex", "luk"];

/// Status id of the first attribute (`str`).
pub const ATTRIBUTE_STATUS_BASE: u16 = 13;

/// Everything before the first whitespace character.
pub fn keyword(text: &str) -> &str {
    text.split(char::is_whitespace).next().unwrap_or("")
}

/// Detect an exact-keyword command in `text`.
/// Returns `None` if the keyword is not registered.
pub fn detect_command(text: &str, registry: &CommandRegistry) -> Option<CommandInvocation> {
    let keyword = keyword(text);
    let def = registry.find_by_alias(keyword)?;

    let argument = if def.takes_argument {
        registry
            .argument_pattern(keyword)
            .and_then(|re| quoted_argument(re, text))
    } else {
        None
    };

    Some(CommandInvocation {
        key: def.key.clone(),
        keyword: keyword.to_string(),
        argument,
        text: text.to_string(),
    })
}

/// Second capture group of an argument pattern, trimmed. Empty counts as no match.
pub fn quoted_argument(pattern: &Regex, text: &str) -> Option<String> {
    let caps = pattern.captures(text)?;
    let arg = caps.get(2)?.as_str().trim();
    if arg.is_empty() {
        None
    } else {
        Some(arg.to_string())
    }
}

/// Parse `<attr>+ <amount>`. Unknown codes, zero, and amounts that do not fit
/// the one-byte wire field yield `None`.
pub fn parse_attribute_increase(text: &str) -> Option<AttributeIncrease> {
    let caps = ATTRIBUTE_RE.captures(text)?;
    let code = caps.get(1)?.as_str();
    let index = ATTRIBUTES.iter().position(|a| *a == code)?;
    let amount: u8 = caps.get(2)?.as_str().parse().ok()?;
    if amount == 0 {
        return None;
    }
    Some(AttributeIncrease {
        attribute: ATTRIBUTES[index],
        status_id: ATTRIBUTE_STATUS_BASE + index as u16,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_stops_at_first_whitespace() {
        assert_eq!(keyword("invite My Friend"), "invite");
        assert_eq!(keyword("sit"), "sit");
        assert_eq!(keyword("guild\t\"Name\""), "guild");
        assert_eq!(keyword(""), "");
        assert_eq!(keyword(" sit"), "");
    }

    #[test]
    fn quotes_are_optional_and_stripped() {
        let registry = CommandRegistry::new();
        let quoted = detect_command(r#"invite "My Friend""#, &registry).unwrap();
        let bare = detect_command("invite My Friend", &registry).unwrap();
        assert_eq!(quoted.argument.as_deref(), Some("My Friend"));
        assert_eq!(bare.argument.as_deref(), Some("My Friend"));
        assert_eq!(quoted.key, "invite");
    }

    #[test]
    fn missing_argument_yields_none() {
        let registry = CommandRegistry::new();
        assert_eq!(detect_command("invite", &registry).unwrap().argument, None);
        assert_eq!(detect_command("invite   ", &registry).unwrap().argument, None);
        assert_eq!(detect_command(r#"guild """#, &registry).unwrap().argument, None);
    }

    #[test]
    fn argument_stops_at_stray_quote() {
        let registry = CommandRegistry::new();
        let inv = detect_command(r#"organize My "Party""#, &registry).unwrap();
        assert_eq!(inv.argument.as_deref(), Some("My"));
    }

    #[test]
    fn unknown_keyword_is_not_detected() {
        let registry = CommandRegistry::new();
        assert!(detect_command("dance", &registry).is_none());
        assert!(detect_command("Sit", &registry).is_none());
    }

    #[test]
    fn attribute_increase_maps_codes_in_order() {
        let inc = parse_attribute_increase("str+ 5").unwrap();
        assert_eq!(inc.status_id, 13);
        assert_eq!(inc.amount, 5);
        assert_eq!(parse_attribute_increase("luk+ 1").unwrap().status_id, 18);
        assert_eq!(parse_attribute_increase("int+ 2").unwrap().attribute, "int");
    }

    #[test]
    fn attribute_increase_rejects_bad_input() {
        assert!(parse_attribute_increase("xyz+ 5").is_none());
        assert!(parse_attribute_increase("str+ 0").is_none());
        assert!(parse_attribute_increase("str+ 300").is_none());
        assert!(parse_attribute_increase("str+5").is_none());
        assert!(parse_attribute_increase("str+ 5 ").is_none());
        assert!(parse_attribute_increase("STR+ 5").is_none());
    }
}
