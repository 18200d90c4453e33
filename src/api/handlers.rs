//! API Handlers
//!
//! HTTP request handlers for each search service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::{CacheError, Result};
use crate::models::{ClearResponse, HealthResponse, SearchParams, SearchResponse, StatsResponse};
use crate::search::SearchEngine;

/// Application state shared across all handlers.
///
/// The engine (dataset + memoization cache) lives behind a single
/// Arc<RwLock<>>; searching takes the write lock because a cache hit
/// mutates recency state.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe search engine
    pub engine: Arc<RwLock<SearchEngine>>,
}

impl AppState {
    /// Creates a new AppState with the given engine.
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }

    /// Creates a new AppState from configuration and a loaded dataset.
    pub fn from_config(
        config: &crate::config::Config,
        dataset: crate::search::Dataset,
    ) -> Result<Self> {
        let engine = SearchEngine::new(dataset, config.cache_capacity, config.result_limit)?;
        Ok(Self::new(engine))
    }
}

/// Handler for GET /search?q=...
///
/// Runs a memoized substring search; on a miss the dataset is scanned and
/// the result stored under the normalized query.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    // Validate request
    if let Some(error_msg) = params.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    // Write lock: even a cache hit reorders recency
    let mut engine = state.engine.write().await;
    let outcome = engine.search(&params.q);

    Ok(Json(SearchResponse::from(outcome)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock is enough; stats are observational
    let engine = state.engine.read().await;
    let stats = engine.stats();

    Json(StatsResponse::new(&stats, engine.cache_capacity()))
}

/// Handler for POST /cache/clear
///
/// Empties the memoization cache; the dataset is untouched.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut engine = state.engine.write().await;
    let cleared = engine.stats().entries;
    engine.clear_cache();

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Dataset, Item};

    fn test_state() -> AppState {
        let dataset = Dataset::from_items(vec![
            Item {
                id: 1,
                name: "Apple".to_string(),
            },
            Item {
                id: 2,
                name: "Banana".to_string(),
            },
        ]);
        AppState::new(SearchEngine::new(dataset, 10, 10).unwrap())
    }

    #[tokio::test]
    async fn test_search_handler_miss_then_hit() {
        let state = test_state();

        let params = SearchParams {
            q: "apple".to_string(),
        };
        let first = search_handler(State(state.clone()), Query(params.clone()))
            .await
            .unwrap();
        assert_eq!(first.count, 1);
        assert!(!first.cached);

        let second = search_handler(State(state), Query(params)).await.unwrap();
        assert!(second.cached);
    }

    #[tokio::test]
    async fn test_search_handler_normalizes_query() {
        let state = test_state();

        let params = SearchParams {
            q: "  APPLE ".to_string(),
        };
        let response = search_handler(State(state), Query(params)).await.unwrap();
        assert_eq!(response.query, "apple");
        assert_eq!(response.count, 1);
    }

    #[tokio::test]
    async fn test_search_handler_rejects_long_query() {
        let state = test_state();

        let params = SearchParams {
            q: "x".repeat(300),
        };
        let result = search_handler(State(state), Query(params)).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.capacity, 10);
    }

    #[tokio::test]
    async fn test_clear_handler() {
        let state = test_state();

        let params = SearchParams {
            q: "apple".to_string(),
        };
        search_handler(State(state.clone()), Query(params.clone()))
            .await
            .unwrap();

        let cleared = clear_handler(State(state.clone())).await;
        assert_eq!(cleared.cleared, 1);

        // Previously memoized query is recomputed after clear
        let response = search_handler(State(state), Query(params)).await.unwrap();
        assert!(!response.cached);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
