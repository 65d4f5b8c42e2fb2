//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "/aZ3k9Q" }
/// ```
///
/// Submitting the same URL string again returns the same short URL.
///
/// The body is decoded as JSON whatever `Content-Type` the client sends.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing, is not JSON, lacks the
/// `url` field, or the URL does not parse.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let payload: ShortenRequest = serde_json::from_slice(&body)?;
    payload.validate()?;

    let link = state.link_service.create_short_link(payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: link.short_path(),
    }))
}
