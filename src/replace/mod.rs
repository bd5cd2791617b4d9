//! Type replacement.
//!
//! Rewrites column types and metadata using an ordered list of
//! [`ReplaceRule`]s. For each column the rule list is folded in declared
//! order: a rule that is in scope for the table and whose pattern matches
//! the current column value patches it, so later matches overwrite fields
//! set by earlier ones while imports accumulate.
//!
//! ```text
//! column ──► rule 0 ──► rule 1 ──► ... ──► rule n ──► column'
//!            (skip if out of scope or no match)
//! ```

mod pattern;

pub use pattern::ColumnPattern;

use serde::{Deserialize, Serialize};
use std::mem;
use tracing::debug;

use crate::config::{ConfigError, ConfigResult};
use crate::schema::{Column, SchemaModel};

/// Replaces matching column fields, optionally scoped to some tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplaceRule {
    /// Tables the rule applies to. Empty means every table.
    pub tables: Vec<String>,
    #[serde(rename = "match")]
    pub matcher: ColumnPattern,
    pub replace: ColumnPattern,
}

impl ReplaceRule {
    pub fn new(matcher: ColumnPattern, replace: ColumnPattern) -> Self {
        Self {
            tables: Vec::new(),
            matcher,
            replace,
        }
    }

    pub fn scoped<I, S>(tables: I, matcher: ColumnPattern, replace: ColumnPattern) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tables: tables.into_iter().map(Into::into).collect(),
            matcher,
            replace,
        }
    }

    pub fn applies_to(&self, table: &str) -> bool {
        self.tables.is_empty() || self.tables.iter().any(|t| t == table)
    }

    /// Static well-formedness. `index` is the rule's position, for errors.
    pub fn validate(&self, index: usize) -> ConfigResult<()> {
        let invalid = |message: &str| ConfigError::InvalidReplacement {
            index,
            message: message.to_string(),
        };

        if self.matcher.has_no_fields() {
            return Err(invalid("match pattern has no fields"));
        }
        if !self.matcher.imports.is_empty() {
            return Err(invalid("imports cannot be matched"));
        }
        if self.replace.has_no_fields() && self.replace.imports.is_empty() {
            return Err(invalid("replacement has no fields"));
        }
        if self.replace.name.is_some() {
            return Err(invalid("replacement may not rename columns"));
        }
        if self.tables.iter().any(|t| t.is_empty()) {
            return Err(invalid("table scope contains an empty name"));
        }
        Ok(())
    }
}

/// Counters reported by [`replace_types`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceStats {
    /// Rule applications across all columns.
    pub matches: usize,
    /// Columns whose value changed.
    pub columns_changed: usize,
}

/// Fold `rules` over a single column of `table`.
pub fn apply_rules(table: &str, column: Column, rules: &[ReplaceRule]) -> Column {
    fold_rules(table, column, rules).0
}

fn fold_rules(table: &str, column: Column, rules: &[ReplaceRule]) -> (Column, usize) {
    rules
        .iter()
        .enumerate()
        .fold((column, 0), |(column, hits), (index, rule)| {
            if !rule.applies_to(table) || !rule.matcher.matches(&column) {
                return (column, hits);
            }
            debug!(table, column = %column.name, rule = index, "replacement matched");
            (rule.replace.apply_to(column), hits + 1)
        })
}

/// Apply the rule list to every column of every table, in place.
///
/// Fails before touching the model when a rule is scoped to a table the
/// schema does not have.
pub fn replace_types(model: &mut SchemaModel, rules: &[ReplaceRule]) -> ConfigResult<ReplaceStats> {
    for (index, rule) in rules.iter().enumerate() {
        if let Some(table) = rule.tables.iter().find(|t| !model.has_table(t)) {
            return Err(ConfigError::unknown_table(
                format!("replacement #{}", index),
                table.as_str(),
            ));
        }
    }

    let mut stats = ReplaceStats::default();
    if rules.is_empty() {
        return Ok(stats);
    }

    for table in &mut model.tables {
        let columns = mem::take(&mut table.columns);
        table.columns = columns
            .into_iter()
            .map(|column| {
                let before = column.clone();
                let (after, hits) = fold_rules(&table.name, column, rules);
                stats.matches += hits;
                if after != before {
                    stats.columns_changed += 1;
                }
                after
            })
            .collect();
    }

    Ok(stats)
}
