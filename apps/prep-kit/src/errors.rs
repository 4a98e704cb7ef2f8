use std::path::PathBuf;

use thiserror::Error;

/// Message written to the error file for every failure that is not a missing input.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while processing your files. Please try again.";

/// Application-level error type.
/// `user_message` plays the role of a response mapping: it decides what the
/// person who submitted the job gets to see in `output/error.txt`.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required upload is absent. The payload is the literal user-facing text.
    #[error("{0}")]
    MissingInput(String),

    #[error("Failed to extract text from '{path}': {detail}")]
    Extraction { path: PathBuf, detail: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Text written to the error file. Internal detail is only ever logged.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::MissingInput(msg) => msg,
            AppError::Extraction { .. } => {
                tracing::error!("{self}");
                GENERIC_ERROR_MESSAGE
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                GENERIC_ERROR_MESSAGE
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                GENERIC_ERROR_MESSAGE
            }
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {msg}");
                GENERIC_ERROR_MESSAGE
            }
        }
    }
}
