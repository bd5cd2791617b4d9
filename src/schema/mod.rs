//! Schema model types.
//!
//! Passive data structures describing tables, columns and constraints. The
//! model is independent of any data source: drivers build it, the resolver
//! phases mutate it in place, and rendering consumes it.

mod column;
mod constraint;
mod relationship;

pub use column::Column;
pub use constraint::{Constraints, ForeignKey, PrimaryKey, Unique};
pub use relationship::{Cardinality, ColumnPair, Relationship, REVERSE_ALIAS_SUFFIX};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A complete schema as produced by a driver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaModel {
    /// Tables in driver order.
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl SchemaModel {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Look up a table by name for mutation.
    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.name == name)
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.table(name).is_some()
    }

    /// Iterate all relationships, table by table.
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.tables.iter().flat_map(|t| t.relationships.iter())
    }

    /// Total number of columns across all tables.
    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }
}

/// A table with its columns, constraints and resolved relationships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub constraints: Constraints,
    /// Relationships originating at this table. Empty until the
    /// relationship phase has run.
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style column append.
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_foreign_key(mut self, fk: ForeignKey) -> Self {
        self.constraints.foreign.push(fk);
        self
    }

    pub fn with_primary_key(mut self, pk: PrimaryKey) -> Self {
        self.constraints.primary = Some(pk);
        self
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Names of columns that occur more than once, in first-seen order.
    pub fn duplicate_columns(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dups = Vec::new();
        for col in &self.columns {
            if !seen.insert(col.name.as_str()) && !dups.contains(&col.name.as_str()) {
                dups.push(col.name.as_str());
            }
        }
        dups
    }
}
