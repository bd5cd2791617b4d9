//! Column filters applied while reading table columns.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{DriverError, DriverResult};
use crate::schema::Column;

/// Selects the columns a driver returns for a table.
///
/// Entries wrapped in slashes (`/^created_/`) are regular expressions,
/// anything else is matched as an exact column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnFilter {
    /// When non-empty, only matching columns are kept.
    pub only: Vec<String>,
    /// Matching columns are removed.
    pub except: Vec<String>,
}

impl ColumnFilter {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            only: names.into_iter().map(Into::into).collect(),
            except: Vec::new(),
        }
    }

    pub fn except<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            only: Vec::new(),
            except: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.only.is_empty() && self.except.is_empty()
    }

    /// Compile the filter so it can be applied repeatedly.
    pub fn compile(&self) -> DriverResult<CompiledFilter> {
        Ok(CompiledFilter {
            only: compile_matchers(&self.only)?,
            except: compile_matchers(&self.except)?,
        })
    }

    /// Apply the filter to an ordered column list, preserving order.
    pub fn apply(&self, columns: Vec<Column>) -> DriverResult<Vec<Column>> {
        if self.is_empty() {
            return Ok(columns);
        }
        let compiled = self.compile()?;
        Ok(columns
            .into_iter()
            .filter(|c| compiled.keeps(&c.name))
            .collect())
    }
}

#[derive(Debug)]
enum NameMatcher {
    Exact(String),
    Pattern(Regex),
}

impl NameMatcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            NameMatcher::Exact(exact) => exact == name,
            NameMatcher::Pattern(re) => re.is_match(name),
        }
    }
}

/// A [`ColumnFilter`] with its patterns compiled.
#[derive(Debug)]
pub struct CompiledFilter {
    only: Vec<NameMatcher>,
    except: Vec<NameMatcher>,
}

impl CompiledFilter {
    pub fn keeps(&self, name: &str) -> bool {
        if !self.only.is_empty() && !self.only.iter().any(|m| m.matches(name)) {
            return false;
        }
        !self.except.iter().any(|m| m.matches(name))
    }
}

fn compile_matchers(entries: &[String]) -> DriverResult<Vec<NameMatcher>> {
    entries
        .iter()
        .map(|entry| {
            let is_pattern = entry.len() > 1 && entry.starts_with('/') && entry.ends_with('/');
            if !is_pattern {
                return Ok(NameMatcher::Exact(entry.clone()));
            }
            let pattern = &entry[1..entry.len() - 1];
            Regex::new(pattern)
                .map(NameMatcher::Pattern)
                .map_err(|source| DriverError::InvalidFilter {
                    pattern: entry.clone(),
                    source,
                })
        })
        .collect()
}
