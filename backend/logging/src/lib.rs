//! Structured logging for chatline.
//!
//! Console and rolling NDJSON output, plus the command event log.

pub mod event_logger;
pub mod logger;

pub use event_logger::{CommandEvent, CommandEventLogger, DispatchStage, EventLogEntry};
pub use logger::{init_console_logger, init_logger, LOG_FILE_NAME};
