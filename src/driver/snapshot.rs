//! A driver that serves a schema from a JSON snapshot.

use std::fs;
use std::path::Path;

use super::error::{DriverError, DriverResult};
use super::filter::ColumnFilter;
use super::{check_columns, Driver};
use crate::schema::{Column, SchemaModel};

/// Serves a previously captured [`SchemaModel`].
///
/// The snapshot format is the serde representation of `SchemaModel`:
///
/// ```json
/// {
///   "tables": [
///     {
///       "name": "users",
///       "columns": [{ "name": "id", "db_type": "serial" }],
///       "constraints": { "primary": { "name": "users_pkey", "columns": ["id"] } }
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotDriver {
    model: SchemaModel,
    filter: ColumnFilter,
}

impl SnapshotDriver {
    pub fn new(model: SchemaModel) -> Self {
        Self {
            model,
            filter: ColumnFilter::default(),
        }
    }

    pub fn from_json_str(json: &str) -> DriverResult<Self> {
        let model: SchemaModel = serde_json::from_str(json)?;
        Ok(Self::new(model))
    }

    pub fn from_path(path: &Path) -> DriverResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| DriverError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Filter applied to every table during [`Driver::assemble`].
    pub fn with_filter(mut self, filter: ColumnFilter) -> Self {
        self.filter = filter;
        self
    }
}

impl Driver for SnapshotDriver {
    fn name(&self) -> &str {
        "snapshot"
    }

    fn assemble(&self) -> DriverResult<SchemaModel> {
        let mut model = self.model.clone();
        for table in &mut model.tables {
            table.columns = self.table_columns(&table.name, &self.filter)?;
            // Relationships are resolved by the pipeline, never taken from the source.
            table.relationships.clear();
        }
        check_columns(&model)?;
        Ok(model)
    }

    fn table_columns(&self, table: &str, filter: &ColumnFilter) -> DriverResult<Vec<Column>> {
        let table = self
            .model
            .table(table)
            .ok_or_else(|| DriverError::TableNotFound(table.to_string()))?;
        filter.apply(table.columns.clone())
    }
}
