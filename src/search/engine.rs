//! Search Engine Module
//!
//! Case-insensitive substring search over the dataset, with results memoized
//! in the LRU cache keyed by the normalized query.

use serde::Serialize;
use tracing::debug;

use crate::cache::{CacheStats, LruCache};
use crate::error::Result;
use crate::search::Dataset;

// == Search Hit ==
/// A single matching item, with its original-cased name. Highlighting the
/// matched substring is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Item identifier
    pub id: u64,
    /// Item name, original casing
    pub name: String,
}

// == Search Outcome ==
/// The result of one search call.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The normalized query the lookup was keyed by
    pub query: String,
    /// Matching items, in dataset order, capped at the result limit
    pub hits: Vec<SearchHit>,
    /// Whether the hits came from the cache
    pub cached: bool,
}

// == Search Engine ==
/// Owns the dataset and the memoization cache.
///
/// Queries are normalized (trimmed, lowercased) before they touch the cache,
/// so "Apple ", "apple" and " APPLE" all share one cache entry. The cache
/// itself never searches or normalizes; on a miss the engine scans the
/// preprocessed dataset and stores what it found.
#[derive(Debug)]
pub struct SearchEngine {
    /// Preprocessed searchable items
    dataset: Dataset,
    /// Memoized results keyed by normalized query
    cache: LruCache<String, Vec<SearchHit>>,
    /// Maximum number of hits returned per query
    result_limit: usize,
}

impl SearchEngine {
    // == Constructor ==
    /// Creates a new engine over `dataset`.
    ///
    /// # Arguments
    /// * `dataset` - The preprocessed item set to search
    /// * `cache_capacity` - Maximum number of memoized queries (must be >= 1)
    /// * `result_limit` - Maximum hits returned per query
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`](crate::error::CacheError) if
    /// `cache_capacity` is zero.
    pub fn new(dataset: Dataset, cache_capacity: usize, result_limit: usize) -> Result<Self> {
        Ok(Self {
            dataset,
            cache: LruCache::new(cache_capacity)?,
            result_limit,
        })
    }

    // == Normalize ==
    /// Normalizes a raw query to its cache key: trimmed and lowercased.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    // == Search ==
    /// Runs a memoized search for `raw` query text.
    ///
    /// An empty (after normalization) query short-circuits to an empty hit
    /// list without touching the cache. Otherwise the cache is consulted
    /// first; on a miss the dataset is scanned and the result stored.
    pub fn search(&mut self, raw: &str) -> SearchOutcome {
        let query = Self::normalize(raw);
        if query.is_empty() {
            return SearchOutcome {
                query,
                hits: Vec::new(),
                cached: false,
            };
        }

        if let Some(hits) = self.cache.get(&query) {
            debug!(%query, "cache hit");
            return SearchOutcome {
                hits: hits.clone(),
                query,
                cached: true,
            };
        }

        let hits = self.scan(&query);
        debug!(%query, hits = hits.len(), "cache miss, scanned dataset");
        self.cache.insert(query.clone(), hits.clone());

        SearchOutcome {
            query,
            hits,
            cached: false,
        }
    }

    /// Scans the preprocessed dataset for substring matches.
    fn scan(&self, query: &str) -> Vec<SearchHit> {
        self.dataset
            .records()
            .filter(|record| record.lower_name.contains(query))
            .take(self.result_limit)
            .map(|record| SearchHit {
                id: record.item.id,
                name: record.item.name.clone(),
            })
            .collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    // == Cache Capacity ==
    /// Returns the memoization cache capacity.
    pub fn cache_capacity(&self) -> usize {
        self.cache.capacity()
    }

    // == Clear Cache ==
    /// Empties the memoization cache; the dataset is untouched.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
