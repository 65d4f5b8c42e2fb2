//! API route configuration.

use crate::api::handlers::{
    health_handler, method_not_allowed_handler, metrics_handler, redirect_handler,
    shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`  - Create a short link
/// - `GET  /metrics`  - Top three shortened domains
/// - `GET  /health`   - Liveness and store sizes
/// - `GET  /{code}`   - Redirect to the original URL
///
/// Static routes take precedence over `/{code}`. Any other method on a
/// known path is answered with a JSON 405.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorten",
            post(shorten_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/metrics",
            get(metrics_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/health",
            get(health_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/{code}",
            get(redirect_handler).fallback(method_not_allowed_handler),
        )
}
