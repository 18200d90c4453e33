//! Search Memo - a search-as-you-type backend
//!
//! Memoizes substring-search results in a fixed-capacity LRU cache keyed by
//! the normalized query.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod search;

pub use api::AppState;
pub use cache::LruCache;
pub use config::Config;
