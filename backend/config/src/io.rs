//! Config file read/write with atomic backup rotation.

use crate::schema::ClientConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Number of rolling backups to keep.
const MAX_BACKUPS: usize = 3;

/// Resolve the chatline config directory.
/// Priority: `CHATLINE_CONFIG_DIR` env > `~/.chatline/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHATLINE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".chatline"),
        None => PathBuf::from(".chatline"),
    }
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist (first run).
pub async fn load_config(path: &Path) -> Result<ClientConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(ClientConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ClientConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Write config to disk atomically (write to temp file, rename).
///
/// Creates a rolling backup of the previous config before overwriting.
pub async fn write_config(config: &ClientConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    if path.exists() {
        rotate_backups(path).await?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    let tmp_path = path.with_extension("yaml.tmp");
    fs::write(&tmp_path, yaml.as_bytes())
        .await
        .with_context(|| format!("Failed to write temp config: {}", tmp_path.display()))?;

    fs::rename(&tmp_path, path)
        .await
        .with_context(|| format!("Failed to rename temp config to: {}", path.display()))?;

    info!(path = %path.display(), "Wrote config");
    Ok(())
}

/// Rotate backup files: config.yaml.bak.1 → .bak.2 → ... → .bak.N
async fn rotate_backups(path: &Path) -> Result<()> {
    for i in (1..MAX_BACKUPS).rev() {
        let old = path.with_extension(format!("yaml.bak.{}", i));
        let new = path.with_extension(format!("yaml.bak.{}", i + 1));
        if old.exists() {
            if let Err(e) = fs::rename(&old, &new).await {
                warn!("Failed to rotate backup {}: {}", old.display(), e);
            }
        }
    }

    let bak = path.with_extension("yaml.bak.1");
    if let Err(e) = fs::copy(path, &bak).await {
        warn!("Failed to create backup {}: {}", bak.display(), e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("absent.yaml")).await.unwrap();
        assert!(cfg.packet_version.is_none());
        assert!(cfg.emotions.is_empty());
    }

    #[tokio::test]
    async fn write_then_load_keeps_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());

        let mut cfg = ClientConfig {
            packet_version: Some(20150513),
            ..Default::default()
        };
        write_config(&cfg, &path).await.unwrap();
        cfg.packet_version = Some(20180307);
        write_config(&cfg, &path).await.unwrap();

        let loaded = load_config(&path).await.unwrap();
        assert_eq!(loaded.packet_version, Some(20180307));

        let backup = load_config(&path.with_extension("yaml.bak.1")).await.unwrap();
        assert_eq!(backup.packet_version, Some(20150513));
    }

    #[tokio::test]
    async fn malformed_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        std::fs::write(&path, "packetVersion: [not a number").unwrap();
        assert!(load_config(&path).await.is_err());
    }
}
