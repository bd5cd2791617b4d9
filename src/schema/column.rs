use serde::{Deserialize, Serialize};

/// A column as reported by a driver, later rewritten by replacement rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    pub name: String,
    /// Type in the generated language (e.g. `string`, `excellent.Type`).
    #[serde(rename = "type")]
    pub source_type: String,
    /// Type as declared in the database (e.g. `serial`, `varchar`).
    #[serde(rename = "db_type", alias = "native_type")]
    pub native_type: String,
    pub nullable: bool,
    /// Default expression text, empty when absent.
    pub default: String,
    pub comment: String,
    pub generated: bool,
    pub auto_incr: bool,
    /// Domain the column type was declared through, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    pub annotations: Vec<String>,
    /// Imports needed by `source_type`. Ordered, duplicates allowed.
    pub imports: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, native_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native_type: native_type.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = source_type.into();
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain_name = Some(domain.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// The domain name when one is set and non-empty.
    pub fn domain(&self) -> Option<&str> {
        self.domain_name.as_deref().filter(|d| !d.is_empty())
    }
}
