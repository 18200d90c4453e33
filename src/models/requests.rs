//! Request DTOs for the search service API
//!
//! Defines the structure of incoming HTTP request parameters.

use serde::Deserialize;

use crate::search::MAX_QUERY_LENGTH;

/// Query parameters for the search operation (GET /search)
///
/// # Fields
/// - `q`: The raw search text; normalization (trim + lowercase) happens in
///   the engine, not here
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Raw search text
    #[serde(default)]
    pub q: String,
}

impl SearchParams {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    /// An empty query is valid and yields an empty result set.
    pub fn validate(&self) -> Option<String> {
        if self.q.len() > MAX_QUERY_LENGTH {
            return Some(format!(
                "Query exceeds maximum length of {} bytes",
                MAX_QUERY_LENGTH
            ));
        }
        None
    }
}
