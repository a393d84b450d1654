//! Collaborator seams the command router calls through.
//!
//! Every implementation lives outside the router: the UI, audio, renderer and
//! gameplay subsystems provide their own.

use serde::{Deserialize, Serialize};

use crate::error::ChatlineError;
use crate::preferences::{Namespace, Preferences};

/// Localized message lookup keyed by table id.
pub trait MessageTable: Send + Sync {
    fn lookup(&self, id: u32) -> Option<String>;

    /// Message `id`, or a visible placeholder when the table has no entry.
    fn message(&self, id: u32) -> String {
        self.lookup(id).unwrap_or_else(|| format!("msg#{id}"))
    }

    /// Message `id`, or `fallback` when the table has no entry.
    fn message_or(&self, id: u32, fallback: &str) -> String {
        self.lookup(id).unwrap_or_else(|| fallback.to_string())
    }
}

/// Static dictionary of emotion command names.
pub trait EmotionTable: Send + Sync {
    /// Emotion type code for a command keyword.
    fn emotion(&self, keyword: &str) -> Option<u8>;
}

/// Persists one preference namespace.
pub trait PreferenceStore: Send + Sync {
    fn save(&self, namespace: Namespace, prefs: &Preferences) -> Result<(), ChatlineError>;
}

/// Local side effects a preference toggle can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientEffect {
    StopSounds,
    PlayBgm,
    StopBgm,
    RefreshNameLabels,
}

pub trait ClientEffects: Send + Sync {
    fn apply(&self, effect: ClientEffect);
}

/// Named external subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsystem {
    Group,
    Guild,
    Friends,
    Companion,
    ChatRoom,
}

/// One subsystem entry point with its (at most one) argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum SubsystemCall {
    GroupLeave,
    GroupInvite { name: String },
    GroupCreate { name: String },
    GuildCreate { name: String },
    GuildBreak { name: String },
    FriendsSayHi,
    HomunculusResetAi,
    ChatRoomCreate,
    ChatRoomLeave,
}

impl SubsystemCall {
    pub fn subsystem(&self) -> Subsystem {
        match self {
            SubsystemCall::GroupLeave
            | SubsystemCall::GroupInvite { .. }
            | SubsystemCall::GroupCreate { .. } => Subsystem::Group,
            SubsystemCall::GuildCreate { .. } | SubsystemCall::GuildBreak { .. } => {
                Subsystem::Guild
            }
            SubsystemCall::FriendsSayHi => Subsystem::Friends,
            SubsystemCall::HomunculusResetAi => Subsystem::Companion,
            SubsystemCall::ChatRoomCreate | SubsystemCall::ChatRoomLeave => Subsystem::ChatRoom,
        }
    }

    pub fn argument(&self) -> Option<&str> {
        match self {
            SubsystemCall::GroupInvite { name }
            | SubsystemCall::GroupCreate { name }
            | SubsystemCall::GuildCreate { name }
            | SubsystemCall::GuildBreak { name } => Some(name),
            _ => None,
        }
    }
}

pub trait SubsystemGateway: Send + Sync {
    fn invoke(&self, call: SubsystemCall);
}

/// Read access to the map the player is on.
pub trait MapInfo: Send + Sync {
    /// Internal map id, e.g. `prontera.gat`.
    fn current_map(&self) -> String;

    /// Human-readable name for a map id.
    fn display_name(&self, map: &str) -> String;
}

/// Millisecond tick source.
pub trait Clock: Send + Sync {
    fn tick(&self) -> u64;
}

/// Wall-clock milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn tick(&self) -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}
