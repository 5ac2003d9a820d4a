//! CLI error type

use rangeform_lib::error::UnknownFieldError;

/// Everything that can stop a command before it produces a verdict.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
