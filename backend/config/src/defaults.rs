//! Config defaults: fills in values the config file leaves out.

use crate::schema::{ClientConfig, GestureConfig, LogConfig};
use chatline_core::BonusWindow;

/// Packet version assumed when none is configured.
pub const DEFAULT_PACKET_VERSION: u32 = 20180307;

/// Default tracing level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Preference directory name under the config directory.
pub const DEFAULT_PREFERENCES_DIR: &str = "preferences";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: ClientConfig) -> ClientConfig {
    let config = apply_protocol_defaults(config);
    let config = apply_gesture_defaults(config);
    apply_logging_defaults(config)
}

fn apply_protocol_defaults(mut config: ClientConfig) -> ClientConfig {
    if config.packet_version.is_none() {
        config.packet_version = Some(DEFAULT_PACKET_VERSION);
    }
    config
}

fn apply_gesture_defaults(mut config: ClientConfig) -> ClientConfig {
    let window = BonusWindow::default();
    let gesture = config.gesture.get_or_insert_with(GestureConfig::default);
    if gesture.min_ms.is_none() {
        gesture.min_ms = Some(window.min_ms);
    }
    if gesture.max_ms.is_none() {
        gesture.max_ms = Some(window.max_ms);
    }
    config
}

fn apply_logging_defaults(mut config: ClientConfig) -> ClientConfig {
    let log = config.log.get_or_insert_with(LogConfig::default);
    if log.level.is_none() {
        log.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    config
}
