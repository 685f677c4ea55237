use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::leaderboard::tools::error::{Result, ToolError};

/// One line of the countries list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// The line with surrounding whitespace removed.
    pub original: String,
    /// Trimmed and lower-cased form used as a lookup key.
    pub normalized: String,
}

impl CountryRecord {
    /// Builds a record from a raw input line.
    pub fn from_line(line: &str) -> Self {
        Self {
            original: line.trim().to_string(),
            normalized: normalize(line),
        }
    }
}

/// One entry of the codes file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRecord {
    /// Descriptive label (quote-delimited field 1).
    pub label: String,
    /// Identifier (quote-delimited field 3).
    pub key: String,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// Trims surrounding whitespace and lower-cases the text.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Controls whether the values of the country map are lower-cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueCase {
    /// Keep the trimmed original spelling.
    #[default]
    Preserve,
    /// Lower-case values the same way keys are.
    Lower,
}

/// Controls whether code labels are lower-cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelCase {
    Preserve,
    #[default]
    Lower,
}

impl LabelCase {
    pub fn apply(self, label: &str) -> String {
        match self {
            LabelCase::Preserve => label.to_string(),
            LabelCase::Lower => label.to_lowercase(),
        }
    }
}

/// What happens when a key is inserted twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with [`ToolError::DuplicateKey`].
    #[default]
    Reject,
    /// Last write wins; the entry keeps its first position.
    Overwrite,
}

/// How the markdown table pairs code entries with countries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStrategy {
    /// Pair by index after sorting both sides; lengths must match.
    #[default]
    Positional,
    /// Match the normalized code key against the country names.
    Key,
    /// Match the normalized code label against the country names.
    Label,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    key: String,
    value: String,
    line: usize,
}

/// String mapping that remembers insertion order.
///
/// Re-inserting an existing key replaces the value in place, so iteration
/// follows the order in which keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedMap {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl OrderedMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair read from `line`, resolving collisions with `policy`.
    pub fn insert(
        &mut self,
        key: String,
        value: String,
        line: usize,
        policy: DuplicatePolicy,
    ) -> Result<()> {
        match self.index.get(&key) {
            Some(&position) => {
                let slot = &mut self.slots[position];
                match policy {
                    DuplicatePolicy::Reject => Err(ToolError::DuplicateKey {
                        key,
                        first_line: slot.line,
                        line,
                    }),
                    DuplicatePolicy::Overwrite => {
                        warn!(
                            key = %key,
                            first_line = slot.line,
                            line,
                            "duplicate key overwrites earlier entry"
                        );
                        slot.value = value;
                        slot.line = line;
                        Ok(())
                    }
                }
            }
            None => {
                self.index.insert(key.clone(), self.slots.len());
                self.slots.push(Slot { key, value, line });
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.slots[position].value.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .map(|slot| (slot.key.as_str(), slot.value.as_str()))
    }

    /// Returns the pairs ordered by key.
    pub fn sorted_by_key(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        pairs.sort_by(|lhs, rhs| lhs.0.cmp(rhs.0));
        pairs
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

impl Serialize for OrderedMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
