use serde::{Deserialize, Serialize};
use std::fmt;

/// Cardinality of a relationship, read from `from_table` to `to_table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl Cardinality {
    /// Cardinality of the same relationship read in the opposite direction.
    pub fn invert(self) -> Self {
        match self {
            Cardinality::OneToOne => Cardinality::OneToOne,
            Cardinality::OneToMany => Cardinality::ManyToOne,
            Cardinality::ManyToOne => Cardinality::OneToMany,
            Cardinality::ManyToMany => Cardinality::ManyToMany,
        }
    }

    /// Whether the far side of the relationship holds many rows.
    pub fn is_to_many(self) -> bool {
        matches!(self, Cardinality::OneToMany | Cardinality::ManyToMany)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::OneToOne => "one_to_one",
            Cardinality::OneToMany => "one_to_many",
            Cardinality::ManyToOne => "many_to_one",
            Cardinality::ManyToMany => "many_to_many",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appended to a relationship name to address its back-reference in
/// alias maps, e.g. `categories_parent_fk.reverse`.
pub const REVERSE_ALIAS_SUFFIX: &str = ".reverse";

/// A column on `from_table` paired with a column on `to_table`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnPair {
    pub from: String,
    pub to: String,
}

impl ColumnPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// A resolved relationship between two tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Constraint or declaration name. Back-references reuse the name of
    /// the relationship they invert.
    pub name: String,
    pub from_table: String,
    pub to_table: String,
    pub kind: Cardinality,
    /// Join table for many-to-many relationships.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_table: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnPair>,
    #[serde(default)]
    pub synthetic_back_reference: bool,
}

impl Relationship {
    /// The inverse relationship, marked as a synthesized back-reference.
    pub fn back_reference(&self) -> Self {
        Self {
            name: self.name.clone(),
            from_table: self.to_table.clone(),
            to_table: self.from_table.clone(),
            kind: self.kind.invert(),
            bridge_table: self.bridge_table.clone(),
            columns: self.columns.iter().map(ColumnPair::reversed).collect(),
            synthetic_back_reference: true,
        }
    }

    /// The ordered identity used for duplicate detection.
    pub fn key(&self) -> (&str, &str, Cardinality) {
        (&self.from_table, &self.to_table, self.kind)
    }

    pub fn is_self_referencing(&self) -> bool {
        self.from_table == self.to_table
    }

    /// Alias key reserved for this relationship if it is a back-reference.
    pub fn reverse_alias_key(&self) -> Option<String> {
        self.synthetic_back_reference
            .then(|| format!("{}{}", self.name, REVERSE_ALIAS_SUFFIX))
    }

    /// Whether an alias keyed by the bare `name` applies.
    ///
    /// A self-referencing back-reference shares its table and name with the
    /// relationship it inverts; only the reverse key reaches it.
    pub fn accepts_name_alias(&self) -> bool {
        !(self.synthetic_back_reference && self.is_self_referencing())
    }
}
