//! Error types for the search service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the search service.
///
/// A cache miss is not an error; `LruCache::get` returns `None` for absent
/// keys. The only failure the cache itself can produce is `InvalidCapacity`
/// at construction.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache constructed with a zero capacity
    #[error("Invalid cache capacity: {0} (capacity must be at least 1)")]
    InvalidCapacity(usize),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Dataset could not be loaded or parsed
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = match &self {
            CacheError::InvalidCapacity(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Dataset(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the search service.
pub type Result<T> = std::result::Result<T, CacheError>;
