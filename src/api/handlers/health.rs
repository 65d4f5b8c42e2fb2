//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthChecks, HealthResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health status with store sizes.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "links": 12, "domains": 3 }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    let links = state.link_service.link_count().await?;
    let domains = state.stats_service.domain_count().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { links, domains },
    }))
}
