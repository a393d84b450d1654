//! Command Event Logger
//!
//! Structured events for every routed chat line, written through `tracing`
//! on the `command_events` target.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Router stage that accepted a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStage {
    Keyword,
    Attribute,
    Emotion,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CommandEvent {
    Dispatched {
        keyword: String,
        stage: DispatchStage,
    },
    NotFound {
        keyword: String,
    },
    PreferenceToggled {
        namespace: String,
        name: String,
        value: String,
    },
    HeadShakeBonus {
        elapsed_ms: u64,
    },
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    pub event: CommandEvent,
}

impl EventLogEntry {
    pub fn new(event: CommandEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }

    /// NDJSON form of the entry.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub struct CommandEventLogger;

impl CommandEventLogger {
    pub fn log_event(event: CommandEvent) {
        let entry = EventLogEntry::new(event);
        info!(target: "command_events", event = %entry.to_json(), "Command event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_event_tag() {
        let entry = EventLogEntry::new(CommandEvent::Dispatched {
            keyword: "sit".into(),
            stage: DispatchStage::Keyword,
        });
        let value: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(value["event"]["type"], "Dispatched");
        assert_eq!(value["event"]["keyword"], "sit");
        assert_eq!(value["event"]["stage"], "keyword");
        assert!(value["timestamp"].is_string());
    }
}
