//! Outbound client-to-zone messages.
//!
//! Actions with two historical encodings get one variant per encoding; the
//! `request_act` and `change_direction` constructors pick the right one.

use serde::{Deserialize, Serialize};

use crate::version::{Encoding, LogicalAction, PacketVersion};

/// Body posture requested from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActRequest {
    SitDown,
    StandUp,
}

impl ActRequest {
    /// Action code carried on the wire.
    pub fn code(&self) -> u8 {
        match self {
            ActRequest::SitDown => 2,
            ActRequest::StandUp => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "packet")]
pub enum ProtocolMessage {
    #[serde(rename = "CZ_REQUEST_ACT")]
    RequestAct { action: u8 },
    #[serde(rename = "CZ_REQUEST_ACT2")]
    RequestAct2 { action: u8 },
    #[serde(rename = "CZ_CHANGE_DIRECTION")]
    ChangeDirection { head_dir: u8, dir: u8 },
    #[serde(rename = "CZ_CHANGE_DIRECTION2")]
    ChangeDirection2 { head_dir: u8, dir: u8 },
    /// Head-shake recovery bonus.
    #[serde(rename = "CZ_DORIDORI")]
    Doridori,
    #[serde(rename = "CZ_REQ_USER_COUNT")]
    ReqUserCount,
    #[serde(rename = "CZ_REMEMBER_WARPPOINT")]
    RememberWarpPoint,
    #[serde(rename = "CZ_ALCHEMIST_RANK")]
    AlchemistRank,
    #[serde(rename = "CZ_BLACKSMITH_RANK")]
    BlacksmithRank,
    #[serde(rename = "CZ_TAEKWON_RANK")]
    TaekwonRank,
    #[serde(rename = "CZ_STATUS_CHANGE")]
    StatusChange { status_id: u16, amount: u8 },
    #[serde(rename = "CZ_REQ_EMOTION")]
    ReqEmotion { kind: u8 },
}

impl ProtocolMessage {
    /// Sit/stand request in the encoding `version` speaks.
    pub fn request_act(version: PacketVersion, act: ActRequest) -> Self {
        let action = act.code();
        match LogicalAction::RequestAct.resolve(version) {
            Encoding::Current => ProtocolMessage::RequestAct2 { action },
            Encoding::Legacy => ProtocolMessage::RequestAct { action },
        }
    }

    /// Facing change in the encoding `version` speaks.
    pub fn change_direction(version: PacketVersion, head_dir: u8, dir: u8) -> Self {
        match LogicalAction::ChangeDirection.resolve(version) {
            Encoding::Current => ProtocolMessage::ChangeDirection2 { head_dir, dir },
            Encoding::Legacy => ProtocolMessage::ChangeDirection { head_dir, dir },
        }
    }

    /// Packet name as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ProtocolMessage::RequestAct { .. } => "CZ_REQUEST_ACT",
            ProtocolMessage::RequestAct2 { .. } => "CZ_REQUEST_ACT2",
            ProtocolMessage::ChangeDirection { .. } => "CZ_CHANGE_DIRECTION",
            ProtocolMessage::ChangeDirection2 { .. } => "CZ_CHANGE_DIRECTION2",
            ProtocolMessage::Doridori => "CZ_DORIDORI",
            ProtocolMessage::ReqUserCount => "CZ_REQ_USER_COUNT",
            ProtocolMessage::RememberWarpPoint => "CZ_REMEMBER_WARPPOINT",
            ProtocolMessage::AlchemistRank => "CZ_ALCHEMIST_RANK",
            ProtocolMessage::BlacksmithRank => "CZ_BLACKSMITH_RANK",
            ProtocolMessage::TaekwonRank => "CZ_TAEKWON_RANK",
            ProtocolMessage::StatusChange { .. } => "CZ_STATUS_CHANGE",
            ProtocolMessage::ReqEmotion { .. } => "CZ_REQ_EMOTION",
        }
    }

    /// The logical action and encoding, for versioned messages only.
    pub fn encoding(&self) -> Option<(LogicalAction, Encoding)> {
        match self {
            ProtocolMessage::RequestAct { .. } => Some((LogicalAction::RequestAct, Encoding::Legacy)),
            ProtocolMessage::RequestAct2 { .. } => {
                Some((LogicalAction::RequestAct, Encoding::Current))
            }
            ProtocolMessage::ChangeDirection { .. } => {
                Some((LogicalAction::ChangeDirection, Encoding::Legacy))
            }
            ProtocolMessage::ChangeDirection2 { .. } => {
                Some((LogicalAction::ChangeDirection, Encoding::Current))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_act_switches_at_cutover() {
        assert_eq!(
            ProtocolMessage::request_act(PacketVersion(20180307), ActRequest::SitDown),
            ProtocolMessage::RequestAct2 { action: 2 }
        );
        assert_eq!(
            ProtocolMessage::request_act(PacketVersion(20180306), ActRequest::StandUp),
            ProtocolMessage::RequestAct { action: 3 }
        );
    }

    #[test]
    fn change_direction_switches_at_cutover() {
        let current = ProtocolMessage::change_direction(PacketVersion(20180307), 1, 4);
        assert_eq!(current, ProtocolMessage::ChangeDirection2 { head_dir: 1, dir: 4 });
        assert_eq!(
            current.encoding(),
            Some((LogicalAction::ChangeDirection, Encoding::Current))
        );

        let legacy = ProtocolMessage::change_direction(PacketVersion(20180306), 2, 0);
        assert_eq!(legacy, ProtocolMessage::ChangeDirection { head_dir: 2, dir: 0 });
    }

    #[test]
    fn serializes_with_packet_tag() {
        let json = serde_json::to_value(ProtocolMessage::StatusChange { status_id: 13, amount: 5 })
            .unwrap();
        assert_eq!(json["packet"], "CZ_STATUS_CHANGE");
        assert_eq!(json["status_id"], 13);
        assert_eq!(json["amount"], 5);
        assert_eq!(ProtocolMessage::Doridori.name(), "CZ_DORIDORI");
        assert_eq!(ProtocolMessage::Doridori.encoding(), None);
    }
}
