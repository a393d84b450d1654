//! `chatline-config`: chatline client configuration management.
//!
//! Provides:
//! - Typed config schema (protocol version, gesture window, logging, emotions)
//! - YAML read/write with atomic backup rotation
//! - Default value application
//! - Validation with field paths
//! - The YAML preference store

pub mod defaults;
pub mod io;
pub mod schema;
pub mod store;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use io::{config_dir, config_file_path, load_config, write_config};
pub use schema::{ClientConfig, GestureConfig, LogConfig};
pub use store::YamlPreferenceStore;
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Result};
use std::path::Path;

/// Load, apply defaults, and validate a config file.
///
/// Warnings are logged; any validation error fails the load.
pub async fn load_and_prepare(path: &Path) -> Result<ClientConfig> {
    let config = load_config(path).await?;
    let config = apply_all_defaults(config);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if let Some(first) = report.errors.into_iter().next() {
        bail!(first);
    }

    Ok(config)
}
