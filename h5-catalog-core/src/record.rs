//! Catalog record types.
//!
//! A [`GameRecord`] is built once per game directory and never modified.
//! [`Catalog`] holds records in strictly ascending id order; the push API
//! rejects anything that would break that.

use serde::{Deserialize, Serialize, Serializer};

use crate::category::Category;
use crate::error::CatalogError;

/// One entry of the generated games catalog.
///
/// Field order matches the emitted JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Numeric name of the game's directory
    pub id: u64,
    /// Display name recovered from the entry document, or a synthetic one
    pub name: String,
    pub category: Category,
    /// Public URL path of the thumbnail
    pub image: String,
    pub description: String,
}

impl GameRecord {
    /// Build a record, deriving the description from the category.
    pub fn new(id: u64, name: impl Into<String>, category: Category, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            image: image.into(),
            description: category.description().to_string(),
        }
    }
}

/// Synthetic name used when a game has no recoverable title.
pub fn fallback_name(id: u64) -> String {
    format!("游戏 {}", id)
}

/// Ordered, duplicate-free collection of game records.
///
/// Serializes as a plain array. Deserializing goes through the same checks
/// as [`Catalog::push`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<GameRecord>")]
pub struct Catalog {
    records: Vec<GameRecord>,
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

impl TryFrom<Vec<GameRecord>> for Catalog {
    type Error = CatalogError;

    fn try_from(records: Vec<GameRecord>) -> Result<Self, Self::Error> {
        let mut catalog = Catalog::new();
        for record in records {
            catalog.push(record)?;
        }
        Ok(catalog)
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Its id must be greater than every id already present.
    pub fn push(&mut self, record: GameRecord) -> Result<(), CatalogError> {
        if let Some(last) = self.records.last() {
            if record.id == last.id {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if record.id < last.id {
                return Err(CatalogError::OutOfOrder {
                    id: record.id,
                    last: last.id,
                });
            }
        }
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&GameRecord> {
        self.records
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|i| &self.records[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a GameRecord;
    type IntoIter = std::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
