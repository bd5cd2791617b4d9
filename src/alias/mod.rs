//! Display and identifier names for tables, columns and relationships.
//!
//! Every name has four table forms (`UpPlural`, `UpSingular`, `DownPlural`,
//! `DownSingular`) plus per-column and per-relationship names. Explicit
//! user aliases win; anything missing is derived from the raw name through
//! the [`Inflector`](crate::inflection::Inflector) and
//! [`NameCasing`](crate::casing::NameCasing).
//!
//! Collisions after aliasing are not detected here; that is the
//! renderer's concern.

mod resolver;

pub use resolver::{AliasResolver, ResolvedAliases, ResolvedTableAlias};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-supplied aliases, keyed by raw table name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Aliases {
    pub tables: BTreeMap<String, TableAlias>,
}

impl Aliases {
    pub fn with_table(mut self, table: impl Into<String>, alias: TableAlias) -> Self {
        self.tables.insert(table.into(), alias);
        self
    }
}

/// Overrides for a single table. Absent fields fall back to derived names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableAlias {
    pub up_plural: Option<String>,
    pub up_singular: Option<String>,
    pub down_plural: Option<String>,
    pub down_singular: Option<String>,
    /// Raw column name → alias.
    pub columns: BTreeMap<String, String>,
    /// Relationship name → alias.
    pub relationships: BTreeMap<String, String>,
}

impl TableAlias {
    pub fn up_plural(mut self, alias: impl Into<String>) -> Self {
        self.up_plural = Some(alias.into());
        self
    }

    pub fn up_singular(mut self, alias: impl Into<String>) -> Self {
        self.up_singular = Some(alias.into());
        self
    }

    pub fn down_plural(mut self, alias: impl Into<String>) -> Self {
        self.down_plural = Some(alias.into());
        self
    }

    pub fn down_singular(mut self, alias: impl Into<String>) -> Self {
        self.down_singular = Some(alias.into());
        self
    }

    pub fn column(mut self, column: impl Into<String>, alias: impl Into<String>) -> Self {
        self.columns.insert(column.into(), alias.into());
        self
    }

    pub fn relationship(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.relationships.insert(name.into(), alias.into());
        self
    }

    /// Every explicit alias value, labelled for error messages.
    fn explicit_values(&self) -> impl Iterator<Item = (String, &str)> {
        let forms = [
            ("up_plural", &self.up_plural),
            ("up_singular", &self.up_singular),
            ("down_plural", &self.down_plural),
            ("down_singular", &self.down_singular),
        ];
        forms
            .into_iter()
            .filter_map(|(label, value)| value.as_deref().map(|v| (label.to_string(), v)))
            .chain(
                self.columns
                    .iter()
                    .map(|(col, v)| (format!("column '{}'", col), v.as_str())),
            )
            .chain(
                self.relationships
                    .iter()
                    .map(|(rel, v)| (format!("relationship '{}'", rel), v.as_str())),
            )
    }
}
