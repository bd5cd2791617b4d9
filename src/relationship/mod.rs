//! Relationship resolution.
//!
//! Relationships come from three places, processed in this order:
//!
//! 1. foreign-key constraints in the schema, unless an explicit
//!    declaration already covers them
//! 2. explicit declarations from configuration, taken verbatim
//! 3. synthesized back-references for relationships without an inverse
//!
//! The result is sorted by (from table, to table, declaration index) and
//! attached to the owning tables.

mod resolver;

pub use resolver::{RelationshipResolver, RelationshipStats};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigResult};
use crate::schema::{Cardinality, ColumnPair, Relationship};

/// A relationship declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationshipDecl {
    pub name: String,
    pub from: String,
    pub to: String,
    pub kind: Cardinality,
    /// Join table, required for many-to-many.
    #[serde(default)]
    pub bridge: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnPair>,
}

impl RelationshipDecl {
    pub fn new(
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        kind: Cardinality,
    ) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
            to: to.into(),
            kind,
            bridge: None,
            columns: Vec::new(),
        }
    }

    pub fn through(mut self, bridge: impl Into<String>) -> Self {
        self.bridge = Some(bridge.into());
        self
    }

    pub fn on(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.columns.push(ColumnPair::new(from, to));
        self
    }

    /// Static well-formedness.
    pub fn validate(&self) -> ConfigResult<()> {
        let invalid = |message: &str| ConfigError::InvalidRelationship {
            name: self.name.clone(),
            message: message.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.from.is_empty() || self.to.is_empty() {
            return Err(invalid("both 'from' and 'to' tables are required"));
        }
        match (&self.kind, &self.bridge) {
            (Cardinality::ManyToMany, None) => Err(invalid("many_to_many requires a bridge table")),
            (Cardinality::ManyToMany, Some(bridge)) if bridge.is_empty() => {
                Err(invalid("bridge table name is empty"))
            }
            (kind, Some(_)) if *kind != Cardinality::ManyToMany => {
                Err(invalid("only many_to_many relationships take a bridge table"))
            }
            _ => Ok(()),
        }
    }

    pub fn to_relationship(&self) -> Relationship {
        Relationship {
            name: self.name.clone(),
            from_table: self.from.clone(),
            to_table: self.to.clone(),
            kind: self.kind,
            bridge_table: self.bridge.clone(),
            columns: self.columns.clone(),
            synthetic_back_reference: false,
        }
    }
}
