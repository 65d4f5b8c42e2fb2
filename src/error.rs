//! Application error type and its HTTP mapping.
//!
//! Every failure is terminal for the request that produced it. Handlers return
//! [`AppError`] and axum turns it into a JSON error body via [`IntoResponse`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload embedded in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request body or unparsable URL.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    MethodNotAllowed { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn method_not_allowed(message: impl Into<String>, details: Value) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable body without consuming it.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::MethodNotAllowed { message, details } => {
                ("method_not_allowed", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();

        AppError::bad_request("Invalid URL", json!({ "fields": fields }))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::bad_request(
            "Invalid request payload",
            json!({ "reason": error.to_string() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::method_not_allowed("nope", json!({})).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_carries_code_and_details() {
        let err = AppError::not_found("Short link not found", json!({ "code": "abc123" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Short link not found");
        assert_eq!(info.details["code"], "abc123");
    }

    #[test]
    fn test_malformed_json_is_validation_error() {
        let err: AppError = serde_json::from_str::<Value>("{\"url\":").unwrap_err().into();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_info().message, "Invalid request payload");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::bad_request("Invalid URL", json!({}));
        assert_eq!(err.to_string(), "Invalid URL");
    }
}
