//! Chatline client configuration schema.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chatline_core::BonusWindow;
use chatline_protocol::PacketVersion;
use serde::{Deserialize, Serialize};

/// Root configuration for the chatline client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Build date of the server protocol, e.g. `20180307`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet_version: Option<u32>,

    /// Directory holding `<namespace>.yaml` preference files.
    /// Relative paths resolve against the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences_dir: Option<PathBuf>,

    /// Path to a `msgstringtable.txt` style message table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gesture: Option<GestureConfig>,

    /// Extra emotion keywords, merged over the built-in dictionary.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub emotions: HashMap<String, u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Directory for the rolling JSON log. Console only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ms: Option<u64>,
}

impl ClientConfig {
    pub fn packet_version(&self) -> PacketVersion {
        PacketVersion(
            self.packet_version
                .unwrap_or(crate::defaults::DEFAULT_PACKET_VERSION),
        )
    }

    pub fn bonus_window(&self) -> BonusWindow {
        let defaults = BonusWindow::default();
        let gesture = self.gesture.clone().unwrap_or_default();
        BonusWindow {
            min_ms: gesture.min_ms.unwrap_or(defaults.min_ms),
            max_ms: gesture.max_ms.unwrap_or(defaults.max_ms),
        }
    }

    pub fn log_level(&self) -> &str {
        self.log
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(crate::defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log.as_ref().and_then(|l| l.dir.as_deref())
    }

    /// Preference directory, resolved against `config_dir`.
    pub fn preferences_dir(&self, config_dir: &Path) -> PathBuf {
        let dir = self
            .preferences_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::defaults::DEFAULT_PREFERENCES_DIR));
        if dir.is_absolute() {
            dir
        } else {
            config_dir.join(dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_yaml() {
        let yaml = r#"
packetVersion: 20150513
preferencesDir: prefs
gesture:
  minMs: 1000
log:
  level: debug
emotions:
  wave: 40
"#;
        let cfg: ClientConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.packet_version(), PacketVersion(20150513));
        assert_eq!(cfg.bonus_window(), BonusWindow { min_ms: 1000, max_ms: 3000 });
        assert_eq!(cfg.log_level(), "debug");
        assert_eq!(cfg.emotions.get("wave"), Some(&40));
        assert_eq!(
            cfg.preferences_dir(Path::new("/home/u/.chatline")),
            PathBuf::from("/home/u/.chatline/prefs")
        );
    }

    #[test]
    fn absolute_preferences_dir_is_kept() {
        let cfg = ClientConfig {
            preferences_dir: Some(PathBuf::from("/var/chatline")),
            ..Default::default()
        };
        assert_eq!(cfg.preferences_dir(Path::new("/etc")), PathBuf::from("/var/chatline"));
    }
}
