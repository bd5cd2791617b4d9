//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::inflection::InflectionError;
use crate::schema::Cardinality;

/// Result type for configuration loading and validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Malformed, conflicting or dangling generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid inflection table: {0}")]
    Inflection(#[from] InflectionError),

    /// A replacement rule is malformed. `index` is its position in the list.
    #[error("replacement #{index}: {message}")]
    InvalidReplacement { index: usize, message: String },

    #[error("alias for '{table}': {message}")]
    InvalidAlias { table: String, message: String },

    #[error("relationship '{name}': {message}")]
    InvalidRelationship { name: String, message: String },

    #[error("relationship '{name}' duplicates '{other}' ({from} -> {to}, {kind})")]
    DuplicateRelationship {
        name: String,
        other: String,
        from: String,
        to: String,
        kind: Cardinality,
    },

    #[error("{context} references unknown table '{table}'")]
    UnknownTable { context: String, table: String },

    #[error("{context} references unknown column '{table}.{column}'")]
    UnknownColumn {
        context: String,
        table: String,
        column: String,
    },
}

impl ConfigError {
    pub fn unknown_table(context: impl Into<String>, table: impl Into<String>) -> Self {
        Self::UnknownTable {
            context: context.into(),
            table: table.into(),
        }
    }

    pub fn unknown_column(
        context: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self::UnknownColumn {
            context: context.into(),
            table: table.into(),
            column: column.into(),
        }
    }
}
