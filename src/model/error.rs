//! Error types for the titlebar binary.
//!
//! The title-bar core has no error path: every operation is total over its
//! inputs and requests against a torn-down bar are silent no-ops. Errors only
//! arise at the edges (configuration, logging, terminal output) and compose
//! into [`AppError`] via `From` so `main` can use `?` throughout.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level error for the command-line front end.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration file exists but could not be read or parsed.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// A `--state` flag name was not recognised.
    #[error("Unknown visual state flag: {0}")]
    UnknownFlag(String),

    /// Writing the layout report failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing the layout report failed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
