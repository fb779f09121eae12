//! Error types for tablegen

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for tablegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during model generation
///
/// Every variant aborts the run. Formatter problems never show up here, the
/// post-processor only logs them.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Opening or pinging the catalog failed
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Database error: {0}")]
    Database(#[from] mysql_async::Error),

    #[error("Failed to decode row: {0}")]
    RowDecode(String),

    #[error("{0} not convert")]
    UnsupportedDataType(String),

    #[error("Unsupported driver: {0} (only mysql is supported)")]
    UnsupportedDriver(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Failed to render table `{table}`: {message}")]
    Render { table: String, message: String },

    #[error("Render worker failed: {0}")]
    Worker(String),

    #[error("Failed to promote into {}: {source}", path.display())]
    Promote {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<minijinja::Error> for CodegenError {
    fn from(err: minijinja::Error) -> Self {
        CodegenError::Template(err.to_string())
    }
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
