//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. Must parse as an absolute URL.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Path of the created (or existing) short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"url": "https://example.com/a"}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let request = ShortenRequest {
            url: "not-a-url".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_url_field_fails_deserialization() {
        let result = serde_json::from_str::<ShortenRequest>(r#"{"link": "https://a.com"}"#);
        assert!(result.is_err());
    }
}
