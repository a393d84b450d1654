//! Packet-version resolution for actions with more than one wire encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Negotiated protocol version, a date-like number such as `20180307`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PacketVersion(pub u32);

impl fmt::Display for PacketVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical actions that have a legacy and a current packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalAction {
    RequestAct,
    ChangeDirection,
}

/// Which of an action's encodings to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Legacy,
    Current,
}

/// Cutover point for one logical action.
#[derive(Debug, Clone, Copy)]
pub struct VersionCutover {
    pub action: LogicalAction,
    /// First version that speaks the current encoding.
    pub threshold: PacketVersion,
}

pub const VERSION_TABLE: &[VersionCutover] = &[
    VersionCutover {
        action: LogicalAction::RequestAct,
        threshold: PacketVersion(20180307),
    },
    VersionCutover {
        action: LogicalAction::ChangeDirection,
        threshold: PacketVersion(20180307),
    },
];

impl LogicalAction {
    pub fn cutover(&self) -> &'static VersionCutover {
        match self {
            LogicalAction::RequestAct => &VERSION_TABLE[0],
            LogicalAction::ChangeDirection => &VERSION_TABLE[1],
        }
    }

    /// Encoding for this action at `version`. The threshold itself is current.
    pub fn resolve(&self, version: PacketVersion) -> Encoding {
        if version >= self.cutover().threshold {
            Encoding::Current
        } else {
            Encoding::Legacy
        }
    }
}
