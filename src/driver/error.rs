//! Driver-specific error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors a driver can report while introspecting a schema.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Failed to read a schema source.
    #[error("failed to read schema from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to deserialize a schema snapshot.
    #[error("failed to deserialize schema: {0}")]
    DeserializeFailed(#[source] serde_json::Error),

    /// A table was requested that the source does not have.
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// A column filter entry is not a valid regular expression.
    #[error("invalid column filter pattern '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The introspected schema is inconsistent.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// Engine-specific failure reported by a concrete driver.
    #[error("{driver} driver error: {message}")]
    Engine {
        /// Name of the driver.
        driver: String,
        /// Error message from the engine.
        message: String,
    },
}

impl DriverError {
    /// Create an engine error for a concrete driver.
    pub fn engine(driver: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Engine {
            driver: driver.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(err: serde_json::Error) -> Self {
        Self::DeserializeFailed(err)
    }
}
