//! YAML-backed preference persistence, one file per namespace.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chatline_core::{ChatlineError, Namespace, PreferenceStore, Preferences};
use tracing::{debug, info, warn};

pub struct YamlPreferenceStore {
    dir: PathBuf,
}

impl YamlPreferenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn namespace_path(&self, namespace: Namespace) -> PathBuf {
        self.dir.join(format!("{}.yaml", namespace.as_str()))
    }

    /// Restore every namespace. Missing files keep their defaults.
    pub fn load(&self) -> Result<Preferences> {
        let mut prefs = Preferences::default();
        for namespace in Namespace::ALL {
            let path = self.namespace_path(namespace);
            if !path.exists() {
                debug!(%namespace, path = %path.display(), "No saved preferences; using defaults");
                continue;
            }
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences: {}", path.display()))?;
            let value: serde_json::Value = serde_yaml::from_str(&raw)
                .with_context(|| format!("Failed to parse preferences YAML at: {}", path.display()))?;
            prefs
                .set_namespace_value(namespace, value)
                .with_context(|| format!("Invalid {namespace} preferences at: {}", path.display()))?;
        }
        info!(dir = %self.dir.display(), "Loaded preferences");
        Ok(prefs)
    }

    fn write_namespace(&self, namespace: Namespace, prefs: &Preferences) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create preferences directory: {}", self.dir.display())
        })?;

        let path = self.namespace_path(namespace);
        if path.exists() {
            if let Err(e) = fs::copy(&path, path.with_extension("yaml.bak")) {
                warn!("Failed to back up {}: {}", path.display(), e);
            }
        }

        let value = prefs.namespace_value(namespace)?;
        let yaml = serde_yaml::to_string(&value)?;
        let tmp_path = path.with_extension("yaml.tmp");
        fs::write(&tmp_path, yaml.as_bytes())
            .with_context(|| format!("Failed to write temp preferences: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to rename temp preferences to: {}", path.display()))?;
        Ok(())
    }
}

impl PreferenceStore for YamlPreferenceStore {
    fn save(&self, namespace: Namespace, prefs: &Preferences) -> Result<(), ChatlineError> {
        self.write_namespace(namespace, prefs)
            .map_err(|e| ChatlineError::Persistence {
                namespace: namespace.to_string(),
                message: format!("{e:#}"),
            })
    }
}
