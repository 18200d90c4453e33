//! Search Module
//!
//! Substring search over a preprocessed dataset, memoized through the LRU
//! cache. The cache only stores results; normalization and searching happen
//! here, on the caller side.

mod dataset;
mod engine;

// Re-export public types
pub use dataset::{Dataset, Item};
pub use engine::{SearchEngine, SearchHit, SearchOutcome};

// == Public Constants ==
/// Maximum accepted raw query length in bytes
pub const MAX_QUERY_LENGTH: usize = 256;
