//! Handlers for unmatched routes and methods.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Responds 404 for paths no route matches.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}

/// Responds 405 for a known path requested with the wrong method.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(
        format!("Method {} is not allowed", method),
        json!({ "path": uri.path() }),
    )
}
