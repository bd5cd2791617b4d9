//! Singular and plural word forms for default naming.
//!
//! Resolution order for both directions:
//!
//! 1. irregular pairs (user table, then built-in)
//! 2. exact words (user table, then built-in uncountables)
//! 3. user suffix rules in declared order, first match wins
//! 4. the `Inflector` crate's suffix rules, which append `s` for plurals
//!    and leave singulars alone when nothing matches
//!
//! Lookups work on the last `_`-separated segment of a name, so
//! `order_person` pluralizes to `order_people`. An all-caps segment stays
//! all-caps.

mod rules;

use inflector::string::pluralize::to_plural;
use inflector::string::singularize::to_singular;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Result type for building an [`Inflector`].
pub type InflectionResult<T> = Result<T, InflectionError>;

#[derive(Error, Debug)]
pub enum InflectionError {
    #[error("invalid {table} inflection pattern '{pattern}': {source}")]
    InvalidRule {
        table: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A suffix rule as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionRule {
    /// Regular expression, matched case-insensitively.
    pub pattern: String,
    /// Replacement, may reference groups as `${1}`.
    pub replacement: String,
}

impl InflectionRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// User overrides for the inflection tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InflectionTables {
    pub plural: Vec<InflectionRule>,
    /// Singular word → plural word.
    pub plural_exact: BTreeMap<String, String>,
    pub singular: Vec<InflectionRule>,
    /// Plural word → singular word.
    pub singular_exact: BTreeMap<String, String>,
    /// Singular word → plural word, used in both directions.
    pub irregular: BTreeMap<String, String>,
}

impl InflectionTables {
    pub fn is_empty(&self) -> bool {
        self.plural.is_empty()
            && self.plural_exact.is_empty()
            && self.singular.is_empty()
            && self.singular_exact.is_empty()
            && self.irregular.is_empty()
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    regex: Regex,
    replacement: String,
}

impl CompiledRule {
    fn compile(pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            regex,
            replacement: replacement.to_string(),
        })
    }

    fn apply(&self, word: &str) -> Option<String> {
        if self.regex.is_match(word) {
            Some(self.regex.replace(word, self.replacement.as_str()).into_owned())
        } else {
            None
        }
    }
}

static BUILTIN: Lazy<Inflector> = Lazy::new(|| {
    let mut inflector = Inflector {
        plural_rules: Vec::new(),
        singular_rules: Vec::new(),
        plural_exact: HashMap::new(),
        singular_exact: HashMap::new(),
        irregular_plural: HashMap::new(),
        irregular_singular: HashMap::new(),
    };
    for word in rules::UNCOUNTABLE {
        inflector.plural_exact.insert(word.to_string(), word.to_string());
        inflector.singular_exact.insert(word.to_string(), word.to_string());
    }
    for (singular, plural) in rules::IRREGULAR {
        inflector.add_irregular(singular, plural);
    }
    inflector
});

/// Computes singular and plural forms.
#[derive(Debug, Clone)]
pub struct Inflector {
    plural_rules: Vec<CompiledRule>,
    singular_rules: Vec<CompiledRule>,
    plural_exact: HashMap<String, String>,
    singular_exact: HashMap<String, String>,
    /// singular → plural
    irregular_plural: HashMap<String, String>,
    /// plural → singular
    irregular_singular: HashMap<String, String>,
}

impl Default for Inflector {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl Inflector {
    /// Built-in tables extended with user overrides.
    ///
    /// User entries take precedence over built-ins at every stage.
    pub fn with_tables(tables: &InflectionTables) -> InflectionResult<Self> {
        let mut inflector = Self::default();

        for (singular, plural) in &tables.irregular {
            inflector.add_irregular(singular, plural);
        }
        for (singular, plural) in &tables.plural_exact {
            inflector
                .plural_exact
                .insert(singular.to_lowercase(), plural.clone());
        }
        for (plural, singular) in &tables.singular_exact {
            inflector
                .singular_exact
                .insert(plural.to_lowercase(), singular.clone());
        }

        inflector.plural_rules = compile_user("plural", &tables.plural)?;
        inflector.singular_rules = compile_user("singular", &tables.singular)?;

        Ok(inflector)
    }

    fn add_irregular(&mut self, singular: &str, plural: &str) {
        let singular = singular.to_lowercase();
        let plural = plural.to_lowercase();
        self.irregular_plural.insert(singular.clone(), plural.clone());
        self.irregular_singular.insert(plural, singular);
    }

    /// Plural form of `word`.
    pub fn plural(&self, word: &str) -> String {
        let (prefix, last) = split_last_segment(word);
        if last.is_empty() {
            return word.to_string();
        }
        let lower = last.to_lowercase();

        let inflected = if let Some(plural) = self.irregular_plural.get(&lower) {
            match_case(last, plural)
        } else if self.irregular_singular.contains_key(&lower) {
            last.to_string()
        } else if let Some(plural) = self.plural_exact.get(&lower) {
            match_case(last, plural)
        } else if let Some(plural) = self.plural_rules.iter().find_map(|r| r.apply(last)) {
            keep_caps(last, plural)
        } else {
            with_caps(last, to_plural)
        };

        format!("{}{}", prefix, inflected)
    }

    /// Singular form of `word`.
    pub fn singular(&self, word: &str) -> String {
        let (prefix, last) = split_last_segment(word);
        if last.is_empty() {
            return word.to_string();
        }
        let lower = last.to_lowercase();

        let inflected = if let Some(singular) = self.irregular_singular.get(&lower) {
            match_case(last, singular)
        } else if self.irregular_plural.contains_key(&lower) {
            last.to_string()
        } else if let Some(singular) = self.singular_exact.get(&lower) {
            match_case(last, singular)
        } else if let Some(singular) = self.singular_rules.iter().find_map(|r| r.apply(last)) {
            keep_caps(last, singular)
        } else {
            with_caps(last, to_singular)
        };

        format!("{}{}", prefix, inflected)
    }
}

fn compile_user(table: &'static str, rules: &[InflectionRule]) -> InflectionResult<Vec<CompiledRule>> {
    rules
        .iter()
        .map(|rule| {
            CompiledRule::compile(&rule.pattern, &rule.replacement).map_err(|source| {
                InflectionError::InvalidRule {
                    table,
                    pattern: rule.pattern.clone(),
                    source,
                }
            })
        })
        .collect()
}

/// Split `order_items` into (`order_`, `items`).
fn split_last_segment(word: &str) -> (&str, &str) {
    match word.rfind('_') {
        Some(idx) => word.split_at(idx + 1),
        None => ("", word),
    }
}

fn is_all_caps(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
}

/// Upper-case a rule result when the word it came from was all-caps.
fn keep_caps(original: &str, inflected: String) -> String {
    if is_all_caps(original) {
        inflected.to_uppercase()
    } else {
        inflected
    }
}

/// Run a built-in `Inflector` crate rule. Its tables are lower-case, so
/// all-caps words go through lower-cased.
fn with_caps(word: &str, inflect: fn(&str) -> String) -> String {
    if is_all_caps(word) {
        inflect(&word.to_lowercase()).to_uppercase()
    } else {
        inflect(word)
    }
}

/// Carry the capitalization of `original` over to a table entry.
fn match_case(original: &str, replacement: &str) -> String {
    if is_all_caps(original) {
        return replacement.to_uppercase();
    }

    let mut chars = replacement.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(rep_first)) if first.is_uppercase() => {
            rep_first.to_uppercase().chain(chars).collect()
        }
        _ => replacement.to_string(),
    }
}
