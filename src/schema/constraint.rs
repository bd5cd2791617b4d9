use serde::{Deserialize, Serialize};

/// Constraints declared on a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub primary: Option<PrimaryKey>,
    pub foreign: Vec<ForeignKey>,
    pub uniques: Vec<Unique>,
}

impl Constraints {
    /// Whether `columns` is exactly the primary key or one unique constraint.
    ///
    /// Column order is ignored.
    pub fn is_unique_key(&self, columns: &[String]) -> bool {
        let same_set = |other: &[String]| {
            other.len() == columns.len() && columns.iter().all(|c| other.contains(c))
        };

        self.primary
            .as_ref()
            .is_some_and(|pk| same_set(&pk.columns))
            || self.uniques.iter().any(|u| same_set(&u.columns))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryKey {
    pub name: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Unique {
    pub name: String,
    pub columns: Vec<String>,
}

/// A foreign key from columns of the owning table to `foreign_table`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignKey {
    pub name: String,
    pub columns: Vec<String>,
    pub foreign_table: String,
    pub foreign_columns: Vec<String>,
}

impl ForeignKey {
    pub fn new(
        name: impl Into<String>,
        columns: &[&str],
        foreign_table: impl Into<String>,
        foreign_columns: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            foreign_table: foreign_table.into(),
            foreign_columns: foreign_columns.iter().map(|c| c.to_string()).collect(),
        }
    }
}
