//! Ground-truth corpus loading and lookup.
//!
//! The corpus is a static, ordered collection of [`GroundTruthItem`]
//! records, loaded once at startup and validated on the way in. Malformed
//! records are rejected with the offending item named; evaluation never has
//! to defend against a bad ground-truth record at scoring time.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::schema::GroundTruthItem;

/// An ordered, validated collection of ground-truth items.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    items: Vec<GroundTruthItem>,
}

impl Corpus {
    /// Build a corpus from items, validating each record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Corpus`] naming the offending item when a record
    /// violates an invariant: inverted era range, inverted value bounds,
    /// empty keyword list, empty or duplicate id.
    pub fn new(items: Vec<GroundTruthItem>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for item in &items {
            validate(item)?;
            if !seen.insert(item.id.as_str()) {
                return Err(Error::corpus(format!("duplicate item id '{}'", item.id)));
            }
        }
        Ok(Self { items })
    }

    /// Parse a corpus from JSON (an array of ground-truth records).
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<GroundTruthItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load and parse a corpus from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up an item by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownItem`] when the id is not in the corpus.
    /// An unknown id indicates a caller bug, so this is a hard failure.
    pub fn get(&self, id: &str) -> Result<&GroundTruthItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::unknown_item(id))
    }

    /// All items in corpus order.
    #[must_use]
    pub fn items(&self) -> &[GroundTruthItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the corpus has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate(item: &GroundTruthItem) -> Result<()> {
    if item.id.trim().is_empty() {
        return Err(Error::corpus("item with empty id"));
    }
    let expected = &item.expected;
    if expected.era_range.start > expected.era_range.end {
        return Err(Error::corpus(format!(
            "item '{}': era range {}..{} is inverted",
            item.id, expected.era_range.start, expected.era_range.end
        )));
    }
    if expected.value_min > expected.value_max {
        return Err(Error::corpus(format!(
            "item '{}': value bounds {}..{} are inverted",
            item.id, expected.value_min, expected.value_max
        )));
    }
    if expected.name_keywords.is_empty() {
        return Err(Error::corpus(format!("item '{}': nameKeywords is empty", item.id)));
    }
    Ok(())
}
