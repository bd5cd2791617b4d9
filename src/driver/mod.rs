//! Driver port.
//!
//! The resolver core obtains its [`SchemaModel`] exclusively through the
//! [`Driver`] trait. Concrete drivers (one per storage engine) live outside
//! the core; this module ships a [`SnapshotDriver`] that serves a schema
//! from JSON, which is what the CLI and the tests use.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   Pipeline                   │
//! └──────────────────────────────────────────────┘
//!                       │ assemble() / table_columns()
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │                 dyn Driver                   │
//! │  SnapshotDriver │ postgres │ mysql │ ...     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Calls are blocking from the pipeline's point of view. A driver that
//! needs cancellation or retries implements them behind this boundary.

mod error;
mod filter;
mod snapshot;

pub use error::{DriverError, DriverResult};
pub use filter::{ColumnFilter, CompiledFilter};
pub use snapshot::SnapshotDriver;

use crate::schema::{Column, SchemaModel};

/// Source of a relational schema.
pub trait Driver {
    /// Short engine name, used in log output and attribution.
    fn name(&self) -> &str;

    /// Build the complete schema model.
    fn assemble(&self) -> DriverResult<SchemaModel>;

    /// Ordered columns of a single table, restricted by `filter`.
    fn table_columns(&self, table: &str, filter: &ColumnFilter) -> DriverResult<Vec<Column>>;
}

/// Reject a model with a column name repeated within one table.
pub fn check_columns(model: &SchemaModel) -> DriverResult<()> {
    for table in &model.tables {
        if let Some(dup) = table.duplicate_columns().first() {
            return Err(DriverError::InvalidSchema(format!(
                "column '{}' appears more than once in table '{}'",
                dup, table.name
            )));
        }
    }
    Ok(())
}

impl<D: Driver + ?Sized> Driver for &D {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn assemble(&self) -> DriverResult<SchemaModel> {
        (**self).assemble()
    }

    fn table_columns(&self, table: &str, filter: &ColumnFilter) -> DriverResult<Vec<Column>> {
        (**self).table_columns(table, filter)
    }
}

impl<D: Driver + ?Sized> Driver for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn assemble(&self) -> DriverResult<SchemaModel> {
        (**self).assemble()
    }

    fn table_columns(&self, table: &str, filter: &ColumnFilter) -> DriverResult<Vec<Column>> {
        (**self).table_columns(table, filter)
    }
}
