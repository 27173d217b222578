use std::io;
use thiserror::Error;

/// Crate-wide error type.
///
/// Only construction-time work can fail (loading a catalog, reading
/// configuration). Turn processing itself never returns an error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors, e.g. reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents malformed JSON in an intent catalog.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents data validation errors (e.g., an intent without responses).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an unparsable environment variable).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Json(e) => AppError::Validation(format!("JSON error: {}", e)),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
