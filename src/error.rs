//! Error types for the Biblius console core

use reqwest::StatusCode;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    UnexpectedStatus { status: StatusCode, message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Entity has no identifier and cannot be updated")]
    MissingIdentifier,

    #[error("File load error: {0}")]
    FileLoad(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
