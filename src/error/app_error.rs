use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type for the `toolchain-env` binary.
///
/// Every variant is fatal: `main` prints the message on stderr and exits
/// with a non-zero status.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Logger setup failed
    #[error("Logger initialization failed: {source}")]
    Logger {
        #[source]
        source: anyhow::Error,
    },

    /// Rendering command output failed
    #[error("Failed to render {format} output: {message}")]
    Output { format: String, message: String },

    /// Writing to stdout failed
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn output<F: Into<String>, M: ToString>(format: F, error: M) -> Self {
        AppError::Output {
            format: format.into(),
            message: error.to_string(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Logger { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
