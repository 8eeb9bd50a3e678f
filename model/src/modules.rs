//! Module collection
//!
//! Maps the full text of each module header line to its record. Iteration
//! follows the order in which headers first appeared.

use crate::Maintainer;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when a module header repeats an earlier one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace the earlier record with a fresh one
    #[default]
    Overwrite,
    /// Keep filling the earlier record
    Merge,
    /// Reject the input
    Error,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Overwrite => write!(f, "overwrite"),
            DuplicatePolicy::Merge => write!(f, "merge"),
            DuplicatePolicy::Error => write!(f, "error"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            "merge" => Ok(DuplicatePolicy::Merge),
            "error" => Ok(DuplicatePolicy::Error),
            other => Err(format!("unknown duplicate policy: {}", other)),
        }
    }
}

/// Module name -> maintainer record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modules {
    entries: IndexMap<String, Maintainer>,
}

impl Modules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Maintainer> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Maintainer> {
        self.entries.get_mut(name)
    }

    /// Insert or replace a record. A replaced record keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, record: Maintainer) -> Option<Maintainer> {
        self.entries.insert(name.into(), record)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Maintainer> {
        self.entries.iter()
    }

    /// Module names in collection order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Invert the `mails` fields: mail -> modules citing it.
    ///
    /// Mails appear in first-seen order. Each module is listed once per
    /// mail even if its section repeats the address.
    pub fn mail_index(&self) -> IndexMap<&str, Vec<&str>> {
        let mut index: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for (name, record) in &self.entries {
            for mail in &record.mails {
                let names = index.entry(mail.as_str()).or_default();
                if names.last() != Some(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        index
    }
}

impl<'a> IntoIterator for &'a Modules {
    type Item = (&'a String, &'a Maintainer);
    type IntoIter = indexmap::map::Iter<'a, String, Maintainer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, Maintainer)> for Modules {
    fn from_iter<I: IntoIterator<Item = (String, Maintainer)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
