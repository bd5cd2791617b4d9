//! Identifier casing.
//!
//! Two independent conventions live here:
//!
//! - [`NameCasing`] produces the `Up` (exported, `UserID`) and `Down`
//!   (unexported, `userID`) identifier forms used for aliases. Known
//!   initialisms are upper-cased as a whole word.
//! - [`TagCasing`] selects how column names are written into generated
//!   metadata annotations.

use inflector::cases::camelcase::to_camel_case;
use inflector::cases::pascalcase::to_pascal_case;
use inflector::cases::snakecase::to_snake_case;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Words written fully upper-case in identifiers.
static DEFAULT_INITIALISMS: &[&str] = &[
    "acl", "api", "ascii", "cpu", "css", "csv", "db", "dns", "eof", "guid", "html", "http",
    "https", "id", "ip", "json", "lhs", "qps", "ram", "rhs", "rpc", "sla", "smtp", "sql", "ssh",
    "tcp", "tls", "ttl", "udp", "ui", "uid", "uri", "url", "utf8", "uuid", "vm", "xml", "xmpp",
    "xsrf", "xss",
];

/// Builds `Up`/`Down` identifier forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCasing {
    initialisms: BTreeSet<String>,
}

impl Default for NameCasing {
    fn default() -> Self {
        Self {
            initialisms: DEFAULT_INITIALISMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl NameCasing {
    /// Default initialisms plus `extra`.
    pub fn with_initialisms<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut casing = Self::default();
        casing
            .initialisms
            .extend(extra.into_iter().map(|s| s.as_ref().to_lowercase()));
        casing
    }

    /// Exported form: `user_id` → `UserID`.
    pub fn up(&self, name: &str) -> String {
        words(name).iter().map(|w| self.word_up(w)).collect()
    }

    /// Unexported form: `user_id` → `userID`, `id_card` → `idCard`.
    pub fn down(&self, name: &str) -> String {
        let words = words(name);
        let mut out = String::with_capacity(name.len());
        for (i, word) in words.iter().enumerate() {
            if i == 0 {
                out.push_str(word);
            } else {
                out.push_str(&self.word_up(word));
            }
        }
        out
    }

    fn word_up(&self, word: &str) -> String {
        if self.initialisms.contains(word) {
            return word.to_uppercase();
        }
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Lower-case words of a name, whatever casing it arrives in.
fn words(name: &str) -> Vec<String> {
    to_snake_case(name)
        .split('_')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Casing of column names inside generated metadata annotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCasing {
    Camel,
    Title,
    #[default]
    Snake,
}

impl TagCasing {
    pub fn apply(self, name: &str) -> String {
        match self {
            TagCasing::Camel => to_camel_case(name),
            TagCasing::Title => to_pascal_case(name),
            TagCasing::Snake => to_snake_case(name),
        }
    }
}

impl fmt::Display for TagCasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagCasing::Camel => write!(f, "camel"),
            TagCasing::Title => write!(f, "title"),
            TagCasing::Snake => write!(f, "snake"),
        }
    }
}

impl FromStr for TagCasing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" => Ok(TagCasing::Camel),
            "title" => Ok(TagCasing::Title),
            "snake" => Ok(TagCasing::Snake),
            other => Err(format!("unknown tag casing '{}', expected camel, title or snake", other)),
        }
    }
}
