use serde::Serialize;
use std::io::Write;

use super::{relationship_tags, struct_tags, RenderInput, RenderResult, Renderer, TemplateSource};
use crate::hash;

/// Writes the resolved model as JSON.
///
/// Output is a flat view per table: derived names next to raw names,
/// patched column types, struct tags and the relationship list in
/// resolution order.
pub struct JsonRenderer<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[derive(Serialize)]
struct Document<'a> {
    generator: &'a str,
    fingerprint: String,
    tables: Vec<TableView<'a>>,
    templates: &'a [TemplateSource],
}

#[derive(Serialize)]
struct TableView<'a> {
    name: &'a str,
    up_plural: String,
    up_singular: String,
    down_plural: String,
    down_singular: String,
    columns: Vec<ColumnView<'a>>,
    relationships: Vec<RelationshipView<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    relationship_tags: Vec<String>,
}

#[derive(Serialize)]
struct ColumnView<'a> {
    name: &'a str,
    alias: String,
    #[serde(rename = "type")]
    source_type: &'a str,
    db_type: &'a str,
    nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    imports: &'a Vec<String>,
    tags: Vec<String>,
}

#[derive(Serialize)]
struct RelationshipView<'a> {
    name: &'a str,
    alias: String,
    to: &'a str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bridge: Option<&'a str>,
    synthetic: bool,
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&mut self, input: RenderInput) -> RenderResult<()> {
        let fingerprint = hash::fingerprint(&input)?;
        let ctx = &input.context;

        let tables = input
            .model
            .tables
            .iter()
            .map(|table| {
                let names = input.aliases.table(&table.name);
                TableView {
                    name: &table.name,
                    up_plural: names.up_plural.clone(),
                    up_singular: names.up_singular.clone(),
                    down_plural: names.down_plural.clone(),
                    down_singular: names.down_singular.clone(),
                    columns: table
                        .columns
                        .iter()
                        .map(|column| ColumnView {
                            name: &column.name,
                            alias: names.column(&column.name, input.aliases.casing()),
                            source_type: &column.source_type,
                            db_type: &column.native_type,
                            nullable: column.nullable,
                            domain: column.domain(),
                            imports: &column.imports,
                            tags: struct_tags(ctx, column)
                                .iter()
                                .map(ToString::to_string)
                                .collect(),
                        })
                        .collect(),
                    relationships: table
                        .relationships
                        .iter()
                        .map(|rel| RelationshipView {
                            name: &rel.name,
                            alias: input.aliases.relationship(rel),
                            to: &rel.to_table,
                            kind: rel.kind.as_str(),
                            bridge: rel.bridge_table.as_deref(),
                            synthetic: rel.synthetic_back_reference,
                        })
                        .collect(),
                    relationship_tags: if table.relationships.is_empty() {
                        Vec::new()
                    } else {
                        relationship_tags(ctx).iter().map(ToString::to_string).collect()
                    },
                }
            })
            .collect();

        let document = Document {
            generator: &ctx.generator,
            fingerprint,
            tables,
            templates: &input.templates,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
