//! Partial columns used as match patterns and patches.

use serde::{Deserialize, Serialize};

use crate::schema::Column;

/// A column with every field optional.
///
/// As a match pattern, only present fields constrain and each must equal
/// the column's value. As a patch, present fields overwrite the column and
/// `imports` are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnPattern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(rename = "db_type", alias = "native_type", skip_serializing_if = "Option::is_none")]
    pub native_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_incr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
}

impl ColumnPattern {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    pub fn with_db_type(mut self, native_type: impl Into<String>) -> Self {
        self.native_type = Some(native_type.into());
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain_name = Some(domain.into());
        self
    }

    pub fn with_annotations<I, S>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.annotations = Some(annotations.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Whether no scalar field is present. `imports` are not considered.
    pub fn has_no_fields(&self) -> bool {
        self.name.is_none()
            && self.source_type.is_none()
            && self.native_type.is_none()
            && self.nullable.is_none()
            && self.default.is_none()
            && self.comment.is_none()
            && self.generated.is_none()
            && self.auto_incr.is_none()
            && self.domain_name.is_none()
            && self.annotations.is_none()
    }

    /// Whether every present field equals the column's value.
    ///
    /// A present `domain_name` only matches a column that carries a
    /// non-empty domain of the same value.
    pub fn matches(&self, column: &Column) -> bool {
        fn eq<T: PartialEq + ?Sized>(pattern: Option<&T>, value: &T) -> bool {
            pattern.map_or(true, |p| p == value)
        }

        eq(self.name.as_deref(), column.name.as_str())
            && eq(self.source_type.as_deref(), column.source_type.as_str())
            && eq(self.native_type.as_deref(), column.native_type.as_str())
            && eq(self.nullable.as_ref(), &column.nullable)
            && eq(self.default.as_deref(), column.default.as_str())
            && eq(self.comment.as_deref(), column.comment.as_str())
            && eq(self.generated.as_ref(), &column.generated)
            && eq(self.auto_incr.as_ref(), &column.auto_incr)
            && eq(self.annotations.as_ref(), &column.annotations)
            && self
                .domain_name
                .as_deref()
                .map_or(true, |d| column.domain() == Some(d))
    }

    /// Overwrite present fields and append imports.
    pub fn apply_to(&self, mut column: Column) -> Column {
        if let Some(name) = &self.name {
            column.name = name.clone();
        }
        if let Some(source_type) = &self.source_type {
            column.source_type = source_type.clone();
        }
        if let Some(native_type) = &self.native_type {
            column.native_type = native_type.clone();
        }
        if let Some(nullable) = self.nullable {
            column.nullable = nullable;
        }
        if let Some(default) = &self.default {
            column.default = default.clone();
        }
        if let Some(comment) = &self.comment {
            column.comment = comment.clone();
        }
        if let Some(generated) = self.generated {
            column.generated = generated;
        }
        if let Some(auto_incr) = self.auto_incr {
            column.auto_incr = auto_incr;
        }
        if let Some(domain) = &self.domain_name {
            column.domain_name = Some(domain.clone());
        }
        if let Some(annotations) = &self.annotations {
            column.annotations = annotations.clone();
        }
        column.imports.extend(self.imports.iter().cloned());
        column
    }
}
