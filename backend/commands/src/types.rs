/// Chat command types.
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandCategory {
    /// Client-side preference toggles.
    Preferences,
    /// Posture and facing.
    Movement,
    /// Location and server info.
    Info,
    Party,
    Guild,
    Social,
    Ranking,
    Companion,
}

// ---------------------------------------------------------------------------
// Command definition
// ---------------------------------------------------------------------------

/// A fully-defined chat command entry in the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDef {
    /// Unique key (e.g. "noctrl", "sit", "invite").
    pub key: String,
    pub description: String,
    pub category: CommandCategory,
    /// Exact, case-sensitive keywords that select this command.
    pub aliases: Vec<String>,
    /// Needs a single free-text argument, optionally wrapped in double quotes.
    pub takes_argument: bool,
}

impl CommandDef {
    /// Primary alias (first in list), or key if none.
    pub fn primary_alias(&self) -> &str {
        self.aliases.first().map(|s| s.as_str()).unwrap_or(&self.key)
    }
}

// ---------------------------------------------------------------------------
// Parsed invocation
// ---------------------------------------------------------------------------

/// A detected chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub key: String,
    /// The keyword as typed.
    pub keyword: String,
    /// Extracted argument for commands that take one; `None` when the
    /// argument pattern did not match.
    pub argument: Option<String>,
    /// The whole line.
    pub text: String,
}

/// `<attr>+ <amount>` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeIncrease {
    pub attribute: &'static str,
    pub status_id: u16,
    pub amount: u8,
}
