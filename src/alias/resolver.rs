use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

use super::{Aliases, TableAlias};
use crate::casing::NameCasing;
use crate::config::{ConfigError, ConfigResult};
use crate::inflection::Inflector;
use crate::schema::{Relationship, SchemaModel};

/// Fully resolved names of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTableAlias {
    pub up_plural: String,
    pub up_singular: String,
    pub down_plural: String,
    pub down_singular: String,
    /// Every column of the table, raw name → alias.
    pub columns: BTreeMap<String, String>,
    /// Explicit relationship aliases only; see [`ResolvedAliases::relationship`].
    pub relationships: BTreeMap<String, String>,
}

impl ResolvedTableAlias {
    /// Alias of `column`, derived when the table has no entry for it.
    pub fn column(&self, column: &str, casing: &NameCasing) -> String {
        self.columns
            .get(column)
            .cloned()
            .unwrap_or_else(|| casing.up(column))
    }
}

/// Resolved aliases for a whole schema.
///
/// Lookups never fail: a table, column or relationship without an entry
/// receives its derived default.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedAliases {
    pub tables: BTreeMap<String, ResolvedTableAlias>,
    #[serde(skip)]
    inflector: Inflector,
    #[serde(skip)]
    casing: NameCasing,
}

impl ResolvedAliases {
    /// Names of `table`.
    pub fn table(&self, table: &str) -> Cow<'_, ResolvedTableAlias> {
        match self.tables.get(table) {
            Some(alias) => Cow::Borrowed(alias),
            None => Cow::Owned(derive_table(
                table,
                &TableAlias::default(),
                &self.inflector,
                &self.casing,
            )),
        }
    }

    /// Alias of `column` on `table`.
    pub fn column(&self, table: &str, column: &str) -> String {
        self.table(table).column(column, &self.casing)
    }

    /// Alias of a relationship, as seen from its `from_table`.
    ///
    /// A back-reference is looked up under `<name>.reverse` first, then
    /// under its bare name unless it points back at its own table. Defaults
    /// to the target table's `UpPlural` for to-many kinds and `UpSingular`
    /// otherwise.
    pub fn relationship(&self, rel: &Relationship) -> String {
        if let Some(alias) = self
            .tables
            .get(&rel.from_table)
            .and_then(|t| explicit_relationship(t, rel))
        {
            return alias.clone();
        }

        let target = self.table(&rel.to_table);
        if rel.kind.is_to_many() {
            target.up_plural.clone()
        } else {
            target.up_singular.clone()
        }
    }

    /// Fail when a relationship alias names a relationship `model` lacks.
    pub fn check_relationships(&self, model: &SchemaModel) -> ConfigResult<()> {
        for (table_name, alias) in &self.tables {
            let Some(table) = model.table(table_name) else {
                continue;
            };
            for name in alias.relationships.keys() {
                let known = table.relationships.iter().any(|r| {
                    &r.name == name || r.reverse_alias_key().as_ref() == Some(name)
                });
                if !known {
                    return Err(ConfigError::InvalidAlias {
                        table: table_name.clone(),
                        message: format!("no relationship named '{}'", name),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn casing(&self) -> &NameCasing {
        &self.casing
    }
}

/// Computes [`ResolvedAliases`] for a schema.
#[derive(Debug)]
pub struct AliasResolver<'a> {
    aliases: &'a Aliases,
    inflector: &'a Inflector,
    casing: &'a NameCasing,
}

impl<'a> AliasResolver<'a> {
    pub fn new(aliases: &'a Aliases, inflector: &'a Inflector, casing: &'a NameCasing) -> Self {
        Self {
            aliases,
            inflector,
            casing,
        }
    }

    /// Resolve names for every table and column of `model`.
    ///
    /// Aliases that reference unknown tables or columns, or that are empty,
    /// are configuration errors.
    pub fn resolve(&self, model: &SchemaModel) -> ConfigResult<ResolvedAliases> {
        self.check(model)?;

        let empty = TableAlias::default();
        let mut tables = BTreeMap::new();
        for table in &model.tables {
            let overrides = self.aliases.tables.get(&table.name).unwrap_or(&empty);
            let mut resolved = derive_table(&table.name, overrides, self.inflector, self.casing);
            for column in &table.columns {
                resolved
                    .columns
                    .entry(column.name.clone())
                    .or_insert_with(|| self.casing.up(&column.name));
            }
            tables.insert(table.name.clone(), resolved);
        }

        Ok(ResolvedAliases {
            tables,
            inflector: self.inflector.clone(),
            casing: self.casing.clone(),
        })
    }

    fn check(&self, model: &SchemaModel) -> ConfigResult<()> {
        for (table_name, alias) in &self.aliases.tables {
            let table = model
                .table(table_name)
                .ok_or_else(|| ConfigError::unknown_table("alias", table_name.as_str()))?;

            if let Some(column) = alias.columns.keys().find(|c| !table.has_column(c)) {
                return Err(ConfigError::unknown_column(
                    "alias",
                    table_name.as_str(),
                    column.as_str(),
                ));
            }

            if let Some((label, _)) = alias.explicit_values().find(|(_, v)| v.trim().is_empty()) {
                return Err(ConfigError::InvalidAlias {
                    table: table_name.clone(),
                    message: format!("{} is empty", label),
                });
            }
        }
        Ok(())
    }
}

fn explicit_relationship<'t>(table: &'t ResolvedTableAlias, rel: &Relationship) -> Option<&'t String> {
    rel.reverse_alias_key()
        .and_then(|key| table.relationships.get(&key))
        .or_else(|| {
            rel.accepts_name_alias()
                .then(|| table.relationships.get(&rel.name))
                .flatten()
        })
}

fn derive_table(
    name: &str,
    overrides: &TableAlias,
    inflector: &Inflector,
    casing: &NameCasing,
) -> ResolvedTableAlias {
    let plural = inflector.plural(name);
    let singular = inflector.singular(name);

    ResolvedTableAlias {
        up_plural: overrides
            .up_plural
            .clone()
            .unwrap_or_else(|| casing.up(&plural)),
        up_singular: overrides
            .up_singular
            .clone()
            .unwrap_or_else(|| casing.up(&singular)),
        down_plural: overrides
            .down_plural
            .clone()
            .unwrap_or_else(|| casing.down(&plural)),
        down_singular: overrides
            .down_singular
            .clone()
            .unwrap_or_else(|| casing.down(&singular)),
        columns: overrides.columns.clone(),
        relationships: overrides.relationships.clone(),
    }
}
