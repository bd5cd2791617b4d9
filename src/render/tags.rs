//! Struct tag values for generated fields.

use super::RenderContext;
use crate::schema::Column;

/// Tag key always emitted for columns.
pub const DEFAULT_TAG: &str = "db";

/// One `key:"value"` struct tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructTag {
    pub key: String,
    pub value: String,
}

impl std::fmt::Display for StructTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:\"{}\"", self.key, self.value)
    }
}

/// Tag value of a column: `-` when ignored, otherwise the cased name.
pub fn column_tag(ctx: &RenderContext, column: &str) -> String {
    if ctx.is_ignored(column) {
        "-".to_string()
    } else {
        ctx.tag_casing.apply(column)
    }
}

/// Tags of a column field, the default key first.
///
/// The default key always carries the raw column name; extra keys carry
/// the value from [`column_tag`].
pub fn struct_tags(ctx: &RenderContext, column: &Column) -> Vec<StructTag> {
    let value = column_tag(ctx, &column.name);
    let mut tags = vec![StructTag {
        key: DEFAULT_TAG.to_string(),
        value: if ctx.is_ignored(&column.name) {
            value.clone()
        } else {
            column.name.clone()
        },
    }];
    tags.extend(
        ctx.tags
            .iter()
            .filter(|key| key.as_str() != DEFAULT_TAG)
            .map(|key| StructTag {
                key: key.clone(),
                value: value.clone(),
            }),
    );
    tags
}

/// Tags on the relationship holder field, all set to `relation_tag`.
pub fn relationship_tags(ctx: &RenderContext) -> Vec<StructTag> {
    std::iter::once(DEFAULT_TAG)
        .chain(ctx.tags.iter().map(String::as_str).filter(|k| *k != DEFAULT_TAG))
        .map(|key| StructTag {
            key: key.to_string(),
            value: ctx.relation_tag.clone(),
        })
        .collect()
}
