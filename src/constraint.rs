//! Constraints declared in configuration.
//!
//! Some schemas lack foreign keys or unique indexes the application relies
//! on. Configured constraints are merged into the assembled model before
//! any resolver phase runs:
//!
//! - a configured primary key replaces the driver's
//! - foreign keys and unique constraints are appended in declaration order

use std::collections::BTreeMap;
use tracing::debug;

use crate::config::{ConfigError, ConfigResult};
use crate::schema::{Constraints, SchemaModel, Table};

/// Merge `extra` into `model`. Returns the number of constraints added.
///
/// Every table and column named by `extra` must exist; the model is left
/// untouched otherwise.
pub fn merge_constraints(
    model: &mut SchemaModel,
    extra: &BTreeMap<String, Constraints>,
) -> ConfigResult<usize> {
    for (table_name, constraints) in extra {
        let table = model
            .table(table_name)
            .ok_or_else(|| ConfigError::unknown_table("constraint", table_name.as_str()))?;
        check(model, table, constraints)?;
    }

    let mut added = 0;
    for (table_name, constraints) in extra {
        let Some(table) = model.table_mut(table_name) else {
            continue;
        };
        let target = &mut table.constraints;

        if let Some(pk) = &constraints.primary {
            debug!(table = %table_name, name = %pk.name, "replacing primary key");
            target.primary = Some(pk.clone());
            added += 1;
        }
        target.foreign.extend(constraints.foreign.iter().cloned());
        target.uniques.extend(constraints.uniques.iter().cloned());
        added += constraints.foreign.len() + constraints.uniques.len();
    }

    Ok(added)
}

fn check(model: &SchemaModel, table: &Table, constraints: &Constraints) -> ConfigResult<()> {
    let local = constraints
        .primary
        .iter()
        .flat_map(|pk| pk.columns.iter())
        .chain(constraints.uniques.iter().flat_map(|u| u.columns.iter()))
        .chain(constraints.foreign.iter().flat_map(|fk| fk.columns.iter()));
    for column in local {
        if !table.has_column(column) {
            return Err(ConfigError::unknown_column(
                "constraint",
                table.name.as_str(),
                column.as_str(),
            ));
        }
    }

    for fk in &constraints.foreign {
        let context = format!("foreign key '{}'", fk.name);
        let foreign = model
            .table(&fk.foreign_table)
            .ok_or_else(|| ConfigError::unknown_table(context.as_str(), fk.foreign_table.as_str()))?;
        if let Some(column) = fk.foreign_columns.iter().find(|c| !foreign.has_column(c)) {
            return Err(ConfigError::unknown_column(
                context,
                foreign.name.as_str(),
                column.as_str(),
            ));
        }
    }

    Ok(())
}
