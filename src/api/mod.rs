//! API Module
//!
//! HTTP handlers and routing for the search service REST API.
//!
//! # Endpoints
//! - `GET /search?q=<text>` - Memoized substring search
//! - `GET /stats` - Get cache statistics
//! - `POST /cache/clear` - Empty the memoization cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
