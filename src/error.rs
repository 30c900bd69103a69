//! Error types for the momentum scout.

use thiserror::Error;

/// Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

/// Top-level error type.
///
/// Per-outcome history failures never surface as this type; the enrichment
/// stage downgrades them to a zero delta. Only listing fetches and setup
/// errors propagate.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}
