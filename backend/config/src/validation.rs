//! Config validation with field paths.

use crate::schema::ClientConfig;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// All errors and warnings found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &ClientConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_protocol(config, &mut report);
    validate_gesture(config, &mut report);
    validate_emotions(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_protocol(config: &ClientConfig, report: &mut ValidationReport) {
    if config.packet_version == Some(0) {
        report.error("packetVersion", "packetVersion must be a non-zero build date");
    }
}

fn validate_gesture(config: &ClientConfig, report: &mut ValidationReport) {
    let Some(gesture) = &config.gesture else { return };
    if let (Some(min), Some(max)) = (gesture.min_ms, gesture.max_ms) {
        if min >= max {
            report.error(
                "gesture",
                format!("minMs ({min}) must be less than maxMs ({max})"),
            );
        }
    }
}

fn validate_emotions(config: &ClientConfig, report: &mut ValidationReport) {
    for keyword in config.emotions.keys() {
        if keyword.trim().is_empty() {
            report.error("emotions", "Emotion keyword cannot be empty");
        } else if keyword.chars().any(char::is_whitespace) {
            report.error(
                format!("emotions.{keyword}"),
                "Emotion keyword cannot contain whitespace",
            );
        }
    }
}

fn validate_logging(config: &ClientConfig, report: &mut ValidationReport) {
    if config.log_dir().is_none() {
        report.warn("log.dir", "No log directory configured; logging to console only");
    }
}
