//! Run-level error types.
//!
//! Every failure that aborts a generation run surfaces as a [`GenError`]
//! carrying the [`Phase`] it came from. The wrapped error names the
//! offending table, column, rule or relationship.

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;
use crate::driver::DriverError;
use crate::render::RenderError;
use crate::schema::Cardinality;

/// Result type for a generation run.
pub type GenResult<T> = Result<T, GenError>;

/// Result type for relationship resolution.
pub type ResolutionResult<T> = Result<T, ResolutionError>;

/// Pipeline phase, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Validate,
    Assemble,
    Constraints,
    Aliases,
    Replacements,
    Relationships,
    Render,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Validate => "validate",
            Phase::Assemble => "assemble",
            Phase::Constraints => "constraints",
            Phase::Aliases => "aliases",
            Phase::Replacements => "replacements",
            Phase::Relationships => "relationships",
            Phase::Render => "render",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The model is internally inconsistent with the relationships it must carry.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("relationship '{relationship}' references unknown table '{table}'")]
    UnknownTable { relationship: String, table: String },

    #[error("relationship '{relationship}' references unknown column '{table}.{column}'")]
    UnknownColumn {
        relationship: String,
        table: String,
        column: String,
    },

    #[error("foreign key '{relationship}' pairs {columns} column(s) with {foreign_columns}")]
    ColumnCountMismatch {
        relationship: String,
        columns: usize,
        foreign_columns: usize,
    },

    #[error("relationship '{name}' duplicates '{other}' ({from} -> {to}, {kind})")]
    Duplicate {
        name: String,
        other: String,
        from: String,
        to: String,
        kind: Cardinality,
    },
}

/// A failed generation run.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("[assemble] {0}")]
    Driver(#[from] DriverError),

    #[error("[{phase}] {source}")]
    Config {
        phase: Phase,
        #[source]
        source: ConfigError,
    },

    #[error("[{phase}] {source}")]
    Resolution {
        phase: Phase,
        #[source]
        source: ResolutionError,
    },

    #[error("[render] {0}")]
    Render(#[from] RenderError),
}

impl GenError {
    pub fn config(phase: Phase, source: ConfigError) -> Self {
        Self::Config { phase, source }
    }

    pub fn resolution(phase: Phase, source: ResolutionError) -> Self {
        Self::Resolution { phase, source }
    }

    /// Phase the run stopped in.
    pub fn phase(&self) -> Phase {
        match self {
            GenError::Driver(_) => Phase::Assemble,
            GenError::Config { phase, .. } | GenError::Resolution { phase, .. } => *phase,
            GenError::Render(_) => Phase::Render,
        }
    }
}
