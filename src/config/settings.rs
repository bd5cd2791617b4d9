//! TOML-based generator configuration.
//!
//! Supports a config file (schemagen.toml) with environment variable
//! expansion in the `generator` attribution string.
//!
//! Example configuration:
//! ```toml
//! no_back_referencing = false
//! struct_tag_casing = "camel"
//! relation_tag = "-"
//! tag_ignore = ["password"]
//! generator = "schemagen ${CI_COMMIT_SHA}"
//!
//! [[replacements]]
//! tables = ["users"]
//! match = { db_type = "serial" }
//! replace = { type = "excellent.Type", imports = ["rock.com/excellent"] }
//!
//! [aliases.tables.users]
//! up_plural = "Members"
//! columns = { email = "EmailAddress" }
//!
//! [[relationships]]
//! name = "user_tags"
//! from = "users"
//! to = "tags"
//! kind = "many_to_many"
//! bridge = "user_tags"
//!
//! [inflections.irregular]
//! octopus = "octopodes"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};
use crate::alias::Aliases;
use crate::casing::TagCasing;
use crate::inflection::{InflectionTables, Inflector};
use crate::relationship::RelationshipDecl;
use crate::replace::ReplaceRule;
use crate::schema::Constraints;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SCHEMAGEN_CONFIG";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Extra struct tag keys to emit alongside the defaults.
    pub tags: Vec<String>,

    /// Skip generating factories for models.
    pub no_factory: bool,

    /// Skip generating test files.
    pub no_tests: bool,

    /// Do not synthesize inverse relationships.
    pub no_back_referencing: bool,

    /// Delete the output folder before generation.
    pub wipe: bool,

    /// Casing of column names inside struct tags.
    pub struct_tag_casing: TagCasing,

    /// Struct tag key carrying relationship metadata.
    pub relation_tag: String,

    /// Columns whose tag value is `-` (ignored during parsing).
    pub tag_ignore: Vec<String>,

    /// Extra words to upper-case in generated identifiers.
    pub initialisms: Vec<String>,

    pub aliases: Aliases,

    /// Additional constraints, keyed by table.
    pub constraints: BTreeMap<String, Constraints>,

    pub relationships: Vec<RelationshipDecl>,

    /// Order-significant type replacement rules.
    pub replacements: Vec<ReplaceRule>,

    pub inflections: InflectionTables,

    /// Attribution line of generated files. Supports `${VAR}` expansion.
    pub generator: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            no_factory: false,
            no_tests: false,
            no_back_referencing: false,
            wipe: false,
            struct_tag_casing: TagCasing::default(),
            relation_tag: "-".to_string(),
            tag_ignore: Vec::new(),
            initialisms: Vec::new(),
            aliases: Aliases::default(),
            constraints: BTreeMap::new(),
            relationships: Vec::new(),
            replacements: Vec::new(),
            inflections: InflectionTables::default(),
            generator: concat!("schemagen ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let mut config: GeneratorConfig = toml::from_str(content)?;
        config.generator = expand_env_vars(&config.generator)?;
        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SCHEMAGEN_CONFIG`
    /// 2. `./schemagen.toml`
    ///
    /// Falls back to defaults when neither exists.
    pub fn load() -> ConfigResult<Self> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("schemagen.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        Ok(Self::default())
    }

    /// Check the configuration for internal consistency.
    ///
    /// Only checks that need no schema run here; references to tables and
    /// columns are checked by the phase that consumes them.
    pub fn validate(&self) -> ConfigResult<()> {
        for (index, rule) in self.replacements.iter().enumerate() {
            rule.validate(index)?;
        }

        let mut seen: HashMap<(&str, &str, _), &str> = HashMap::new();
        for decl in &self.relationships {
            decl.validate()?;
            let key = (decl.from.as_str(), decl.to.as_str(), decl.kind);
            if let Some(other) = seen.insert(key, decl.name.as_str()) {
                return Err(ConfigError::DuplicateRelationship {
                    name: decl.name.clone(),
                    other: other.to_string(),
                    from: decl.from.clone(),
                    to: decl.to.clone(),
                    kind: decl.kind,
                });
            }
        }

        self.inflector()?;
        Ok(())
    }

    /// Inflector built from the configured tables.
    pub fn inflector(&self) -> ConfigResult<Inflector> {
        Ok(Inflector::with_tables(&self.inflections)?)
    }

    pub fn with_replacements(mut self, rules: Vec<ReplaceRule>) -> Self {
        self.replacements = rules;
        self
    }

    pub fn with_relationships(mut self, decls: Vec<RelationshipDecl>) -> Self {
        self.relationships = decls;
        self
    }

    pub fn with_aliases(mut self, aliases: Aliases) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn without_back_references(mut self) -> Self {
        self.no_back_referencing = true;
        self
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> ConfigResult<String> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let braced = chars.peek() == Some(&'{');
        if braced {
            chars.next();
        }

        let mut var_name = String::new();
        while let Some(&ch) = chars.peek() {
            if braced && ch == '}' {
                chars.next();
                break;
            }
            if !braced && !(ch.is_alphanumeric() || ch == '_') {
                break;
            }
            var_name.push(ch);
            chars.next();
        }

        if var_name.is_empty() && !braced {
            // Just a lone $, keep it
            result.push('$');
            continue;
        }

        let value = env::var(&var_name).map_err(|_| ConfigError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
