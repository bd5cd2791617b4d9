use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

use super::RelationshipDecl;
use crate::error::{ResolutionError, ResolutionResult};
use crate::schema::{Cardinality, ColumnPair, ForeignKey, Relationship, SchemaModel, Table};

type Key = (String, String, Cardinality);

/// Counters reported by [`RelationshipResolver::resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationshipStats {
    /// Relationships materialized from foreign keys.
    pub derived: usize,
    /// Explicit declarations.
    pub explicit: usize,
    /// Synthesized back-references.
    pub synthesized: usize,
    /// Foreign keys dropped because an earlier one had the same
    /// (from, to, kind).
    pub collapsed: usize,
}

/// Builds the relationship set of a schema.
#[derive(Debug)]
pub struct RelationshipResolver<'a> {
    declarations: &'a [RelationshipDecl],
    back_references: bool,
}

/// A materialized relationship with its declaration index.
struct Indexed {
    index: usize,
    rel: Relationship,
}

impl<'a> RelationshipResolver<'a> {
    pub fn new(declarations: &'a [RelationshipDecl]) -> Self {
        Self {
            declarations,
            back_references: true,
        }
    }

    /// Disable back-reference synthesis.
    pub fn without_back_references(mut self) -> Self {
        self.back_references = false;
        self
    }

    pub fn with_back_references(mut self, enabled: bool) -> Self {
        self.back_references = enabled;
        self
    }

    /// Replace the relationships of every table in `model`.
    ///
    /// Nothing is written to the model unless every relationship resolves.
    pub fn resolve(&self, model: &mut SchemaModel) -> ResolutionResult<RelationshipStats> {
        let mut stats = RelationshipStats::default();
        let mut materialized: Vec<Indexed> = Vec::new();
        let mut keys: HashMap<Key, String> = HashMap::new();

        // Foreign keys first, in driver order.
        for table in &model.tables {
            for fk in &table.constraints.foreign {
                let rel = self.derive(model, table, fk)?;
                if self.covers(&rel) {
                    debug!(name = %rel.name, from = %rel.from_table, "foreign key covered by declaration");
                    continue;
                }
                if let Some(existing) = keys.get(&owned_key(&rel)) {
                    warn!(
                        name = %rel.name,
                        kept = %existing,
                        from = %rel.from_table,
                        to = %rel.to_table,
                        kind = %rel.kind,
                        "collapsing duplicate foreign-key relationship"
                    );
                    stats.collapsed += 1;
                    continue;
                }
                keys.insert(owned_key(&rel), rel.name.clone());
                materialized.push(Indexed {
                    index: materialized.len(),
                    rel,
                });
                stats.derived += 1;
            }
        }

        // Explicit declarations, verbatim.
        for decl in self.declarations {
            check_declaration(model, decl)?;
            let rel = decl.to_relationship();
            if let Some(other) = keys.get(&owned_key(&rel)) {
                return Err(ResolutionError::Duplicate {
                    name: rel.name.clone(),
                    other: other.clone(),
                    from: rel.from_table.clone(),
                    to: rel.to_table.clone(),
                    kind: rel.kind,
                });
            }
            keys.insert(owned_key(&rel), rel.name.clone());
            materialized.push(Indexed {
                index: materialized.len(),
                rel,
            });
            stats.explicit += 1;
        }

        sort(&mut materialized);

        if self.back_references {
            let synthesized = synthesize(&materialized, &keys);
            stats.synthesized = synthesized.len();
            materialized.extend(synthesized);
            sort(&mut materialized);
        }

        for table in &mut model.tables {
            table.relationships.clear();
        }
        for Indexed { rel, .. } in materialized {
            if let Some(table) = model.table_mut(&rel.from_table) {
                table.relationships.push(rel);
            }
        }

        Ok(stats)
    }

    /// Relationship implied by a foreign key on `table`.
    fn derive(
        &self,
        model: &SchemaModel,
        table: &Table,
        fk: &ForeignKey,
    ) -> ResolutionResult<Relationship> {
        let foreign = model
            .table(&fk.foreign_table)
            .ok_or_else(|| ResolutionError::UnknownTable {
                relationship: fk.name.clone(),
                table: fk.foreign_table.clone(),
            })?;

        if fk.columns.len() != fk.foreign_columns.len() {
            return Err(ResolutionError::ColumnCountMismatch {
                relationship: fk.name.clone(),
                columns: fk.columns.len(),
                foreign_columns: fk.foreign_columns.len(),
            });
        }
        check_columns(&fk.name, table, fk.columns.iter())?;
        check_columns(&fk.name, foreign, fk.foreign_columns.iter())?;

        let kind = if table.constraints.is_unique_key(&fk.columns) {
            Cardinality::OneToOne
        } else {
            Cardinality::ManyToOne
        };

        Ok(Relationship {
            name: fk.name.clone(),
            from_table: table.name.clone(),
            to_table: fk.foreign_table.clone(),
            kind,
            bridge_table: None,
            columns: fk
                .columns
                .iter()
                .zip(&fk.foreign_columns)
                .map(|(from, to)| ColumnPair::new(from, to))
                .collect(),
            synthetic_back_reference: false,
        })
    }

    /// Whether an explicit declaration replaces a derived relationship.
    ///
    /// Constraint names are only unique per table, so a name match counts
    /// only when the declaration starts at the same table.
    fn covers(&self, rel: &Relationship) -> bool {
        self.declarations.iter().any(|decl| {
            decl.from == rel.from_table
                && (decl.name == rel.name || (decl.to == rel.to_table && decl.kind == rel.kind))
        })
    }
}

fn owned_key(rel: &Relationship) -> Key {
    (rel.from_table.clone(), rel.to_table.clone(), rel.kind)
}

fn sort(rels: &mut [Indexed]) {
    rels.sort_by(|a, b| {
        (&a.rel.from_table, &a.rel.to_table, a.index)
            .cmp(&(&b.rel.from_table, &b.rel.to_table, b.index))
    });
}

/// Back-references for every relationship without a reverse entry.
///
/// A pair of tables linked in both directions already has its inverse.
/// Self-referencing relationships look for an entry of the inverted kind.
fn synthesize(materialized: &[Indexed], keys: &HashMap<Key, String>) -> Vec<Indexed> {
    let mut added: BTreeSet<Key> = BTreeSet::new();
    let mut out = Vec::new();
    let mut next_index = materialized.len();

    for Indexed { rel, .. } in materialized {
        let has_reverse = if rel.is_self_referencing() {
            rel.kind != rel.kind.invert()
                && keys.contains_key(&(rel.from_table.clone(), rel.to_table.clone(), rel.kind.invert()))
        } else {
            materialized
                .iter()
                .any(|other| other.rel.from_table == rel.to_table && other.rel.to_table == rel.from_table)
        };
        if has_reverse {
            continue;
        }

        let back = rel.back_reference();
        let key = owned_key(&back);
        if keys.contains_key(&key) || !added.insert(key) {
            continue;
        }

        debug!(
            name = %back.name,
            from = %back.from_table,
            to = %back.to_table,
            kind = %back.kind,
            "synthesized back-reference"
        );
        out.push(Indexed {
            index: next_index,
            rel: back,
        });
        next_index += 1;
    }

    out
}

fn check_columns<'c>(
    relationship: &str,
    table: &Table,
    mut columns: impl Iterator<Item = &'c String>,
) -> ResolutionResult<()> {
    match columns.find(|c| !table.has_column(c)) {
        Some(column) => Err(ResolutionError::UnknownColumn {
            relationship: relationship.to_string(),
            table: table.name.clone(),
            column: column.clone(),
        }),
        None => Ok(()),
    }
}

fn check_declaration(model: &SchemaModel, decl: &RelationshipDecl) -> ResolutionResult<()> {
    let lookup = |name: &str| {
        model.table(name).ok_or_else(|| ResolutionError::UnknownTable {
            relationship: decl.name.clone(),
            table: name.to_string(),
        })
    };

    let from = lookup(&decl.from)?;
    let to = lookup(&decl.to)?;
    // Many-to-many pairs point into the bridge table.
    let target = match &decl.bridge {
        Some(bridge) => lookup(bridge)?,
        None => to,
    };

    check_columns(&decl.name, from, decl.columns.iter().map(|p| &p.from))?;
    check_columns(&decl.name, target, decl.columns.iter().map(|p| &p.to))
}
