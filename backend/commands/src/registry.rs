/// Chat command registry: the fixed keyword table.
use std::collections::HashMap;

use regex::Regex;
use tracing::warn;

use crate::types::{CommandCategory, CommandDef};

fn command(key: &str, aliases: &[&str], category: CommandCategory, description: &str) -> CommandDef {
    CommandDef {
        key: key.to_string(),
        description: description.to_string(),
        category,
        aliases: aliases.iter().map(|s| s.to_string()).collect(),
        takes_argument: false,
    }
}

fn toggle(key: &str, description: &str) -> CommandDef {
    command(key, &[key], CommandCategory::Preferences, description)
}

fn with_argument(key: &str, category: CommandCategory, description: &str) -> CommandDef {
    CommandDef {
        takes_argument: true,
        ..command(key, &[key], category, description)
    }
}

/// Build the full built-in command list.
pub fn builtin_commands() -> Vec<CommandDef> {
    use CommandCategory::*;

    vec![
        // Preferences
        toggle("sound", "Toggle sound effects."),
        toggle("bgm", "Toggle background music."),
        toggle("effect", "Toggle skill effects."),
        toggle("mineffect", "Toggle minimal effects."),
        toggle("miss", "Toggle miss display."),
        toggle("aura", "Switch between full and simplified aura."),
        toggle("aura2", "Turn the aura on or off."),
        toggle("showname", "Toggle the name label font."),
        toggle("camera", "Toggle smooth camera."),
        toggle("fog", "Toggle map fog."),
        toggle("lightmap", "Toggle lightmaps."),
        command("noctrl", &["noctrl", "nc"], Preferences, "Attack without holding Ctrl."),
        command("noshift", &["noshift", "ns"], Preferences, "Cast support skills without holding Shift."),
        toggle("snap", "Snap to monsters when attacking."),
        toggle("itemsnap", "Snap to items when picking up."),
        // Movement
        command("sit", &["sit", "stand"], Movement, "Sit down or stand up."),
        command("doridori", &["doridori"], Movement, "Shake your head."),
        command("bangbang", &["bangbang"], Movement, "Turn clockwise."),
        command("bingbing", &["bingbing"], Movement, "Turn counter-clockwise."),
        // Info
        command("where", &["where"], Info, "Show the current map and coordinates."),
        command("who", &["who", "w"], Info, "Show the number of players online."),
        command("memo", &["memo"], Info, "Memorize the current warp point."),
        // Social
        command("chat", &["chat"], Social, "Open the chat room creation window."),
        command("q", &["q"], Social, "Leave the current chat room."),
        command("hi", &["hi"], Social, "Greet all online friends."),
        // Party
        command("leave", &["leave"], Party, "Leave the party."),
        with_argument("invite", Party, "Invite a player to the party."),
        with_argument("organize", Party, "Create a party."),
        // Guild
        with_argument("guild", Guild, "Create a guild."),
        with_argument("breakguild", Guild, "Disband your guild."),
        // Ranking
        command("alchemist", &["alchemist"], Ranking, "Show the alchemist ranking."),
        command("blacksmith", &["blacksmith"], Ranking, "Show the blacksmith ranking."),
        command("taekwon", &["taekwon"], Ranking, "Show the taekwon ranking."),
        // Companion
        command("hoai", &["hoai"], Companion, "Toggle the homunculus custom AI."),
        command("merai", &["merai"], Companion, "Toggle the mercenary custom AI."),
    ]
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

pub struct CommandRegistry {
    commands: Vec<CommandDef>,
    /// `^<keyword>\s+(")?([^"]+)(")?` per alias of argument-taking commands.
    argument_patterns: HashMap<String, Regex>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
            argument_patterns: HashMap::new(),
        };
        for def in builtin_commands() {
            registry.register(def);
        }
        registry
    }

    /// Register an additional command.
    pub fn register(&mut self, def: CommandDef) {
        if def.takes_argument {
            for alias in &def.aliases {
                let pattern = format!(r#"^{}\s+(")?([^"]+)(")?"#, regex::escape(alias));
                match Regex::new(&pattern) {
                    Ok(re) => {
                        self.argument_patterns.insert(alias.clone(), re);
                    }
                    Err(e) => warn!(alias = %alias, error = %e, "Invalid argument pattern"),
                }
            }
        }
        self.commands.push(def);
    }

    pub fn all(&self) -> &[CommandDef] {
        &self.commands
    }

    /// Find a command by exact keyword.
    pub fn find_by_alias(&self, keyword: &str) -> Option<&CommandDef> {
        self.commands
            .iter()
            .find(|c| c.aliases.iter().any(|a| a == keyword))
    }

    /// Find a command by its key.
    pub fn find_by_key(&self, key: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|c| c.key == key)
    }

    pub fn argument_pattern(&self, keyword: &str) -> Option<&Regex> {
        self.argument_patterns.get(keyword)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_the_same_command() {
        let registry = CommandRegistry::new();
        for (a, b) in [("noctrl", "nc"), ("noshift", "ns"), ("who", "w"), ("sit", "stand")] {
            assert_eq!(
                registry.find_by_alias(a).unwrap().key,
                registry.find_by_alias(b).unwrap().key
            );
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = CommandRegistry::new();
        assert!(registry.find_by_alias("sit").is_some());
        assert!(registry.find_by_alias("SIT").is_none());
    }

    #[test]
    fn keys_and_aliases_are_unique() {
        let registry = CommandRegistry::new();
        let mut seen = std::collections::HashSet::new();
        for def in registry.all() {
            assert!(registry.find_by_key(&def.key).is_some());
            for alias in &def.aliases {
                assert!(seen.insert(alias.clone()), "duplicate alias {alias}");
            }
        }
    }

    #[test]
    fn argument_commands_get_patterns() {
        let registry = CommandRegistry::new();
        for key in ["invite", "organize", "guild", "breakguild"] {
            assert!(registry.find_by_key(key).unwrap().takes_argument);
            assert!(registry.argument_pattern(key).is_some());
        }
        assert!(registry.argument_pattern("sit").is_none());
    }
}
