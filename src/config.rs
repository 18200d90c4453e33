//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of memoized queries the cache can hold
    pub cache_capacity: usize,
    /// Maximum number of hits returned per search
    pub result_limit: usize,
    /// Path to the JSON dataset file
    pub dataset_path: String,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum memoized queries (default: 10)
    /// - `RESULT_LIMIT` - Maximum hits per search (default: 10)
    /// - `DATASET_PATH` - Dataset file path (default: data/items.json)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            result_limit: env::var("RESULT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            dataset_path: env::var("DATASET_PATH")
                .unwrap_or_else(|_| "data/items.json".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 10,
            result_limit: 10,
            dataset_path: "data/items.json".to_string(),
            server_port: 3000,
        }
    }
}
