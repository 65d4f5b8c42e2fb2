//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`  - Create a short link
//! - `GET  /metrics`  - Top shortened domains
//! - `GET  /health`   - Health check
//! - `GET  /{code}`   - Short link redirect
//! - anything else    - 404 JSON error
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes, the 404 fallback and tracing.
pub fn router(state: AppState) -> Router {
    api::routes::public_routes()
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service, trimming trailing slashes before
/// routing so `/metrics/` reaches `/metrics`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
