//! Cache Module
//!
//! Fixed-capacity in-memory memoization with LRU eviction.
//!
//! The store pairs a `HashMap` with an arena-backed doubly-linked recency
//! list rather than relying on any container's iteration-order guarantee,
//! giving O(1) get/insert/evict.

mod lru;
mod stats;
mod store;


// Re-export public types
pub use lru::RecencyList;
pub use stats::CacheStats;
pub use store::LruCache;
