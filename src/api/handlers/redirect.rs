//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_parser::parse_url;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `302 Found` with the original URL in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;
    debug!(code = %link.code, "Redirecting");

    let location = location_header(&link.long_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value, percent-encoding the URL when the stored
/// string contains bytes a header cannot carry.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(long_url) {
        return Ok(value);
    }

    parse_url(long_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal("Stored URL is not a valid header value", json!({}))
        })
}
