//! Handler for domain metrics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::metrics::DomainMetric;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the three most frequently shortened domains.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// # Response
///
/// ```json
/// [
///   { "domain": "example.com", "count": 5 },
///   { "domain": "rust-lang.org", "count": 2 }
/// ]
/// ```
///
/// Ordered by count, highest first; equal counts are ordered by domain.
/// Fewer than three entries are returned when fewer domains exist.
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DomainMetric>>, AppError> {
    let top = state.stats_service.top_domains().await?;

    Ok(Json(top.into_iter().map(DomainMetric::from).collect()))
}
