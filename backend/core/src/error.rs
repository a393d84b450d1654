use thiserror::Error;

/// Top-level error type for the chatline runtime.
///
/// None of these reach the command router's caller: the router logs them and
/// carries on.
#[derive(Debug, Error)]
pub enum ChatlineError {
    #[error("failed to persist {namespace} preferences: {message}")]
    Persistence { namespace: String, message: String },
}
