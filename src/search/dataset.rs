//! Dataset Module
//!
//! Loads the searchable item set from a JSON file and preprocesses it for
//! case-insensitive matching.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CacheError, Result};

// == Item ==
/// A single searchable record as stored in the dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    /// Stable identifier
    pub id: u64,
    /// Display name, original casing
    pub name: String,
}

// == Preprocessed Record ==
/// An item with its lowercased name computed once at load time, so the
/// per-query scan never re-lowercases the dataset.
#[derive(Debug, Clone)]
pub(crate) struct Record {
    pub item: Item,
    pub lower_name: String,
}

// == Dataset ==
/// The full searchable dataset, preprocessed and immutable after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    // == Load ==
    /// Loads and preprocesses a dataset from a JSON array file.
    ///
    /// # Errors
    /// Returns [`CacheError::Dataset`] if the file cannot be read or does
    /// not parse as an array of items.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            CacheError::Dataset(format!("failed to read {}: {}", path.display(), e))
        })?;
        let items: Vec<Item> = serde_json::from_str(&raw).map_err(|e| {
            CacheError::Dataset(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Self::from_items(items))
    }

    // == From Items ==
    /// Builds a dataset from already-deserialized items.
    pub fn from_items(items: Vec<Item>) -> Self {
        let records = items
            .into_iter()
            .map(|item| Record {
                lower_name: item.name.to_lowercase(),
                item,
            })
            .collect();
        Self { records }
    }

    /// Iterates records in dataset order.
    pub(crate) fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    // == Length ==
    /// Returns the number of items in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
