//! HTTP error handling for dev server
//!
//! Provides consistent `{message, code, details}` error bodies for every
//! endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pagecraft_core::services::PageServiceError;
use serde::{Deserialize, Serialize};

/// HTTP error response body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpError {
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
    /// Optional detailed error information for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HttpError {
    /// Create a new HTTP error
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn unauthenticated() -> Self {
        Self::new("Missing x-user-id header", "UNAUTHENTICATED")
    }

    pub fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "PAGE_NOT_FOUND" | "SITE_NOT_FOUND" => StatusCode::NOT_FOUND,
            "ACCESS_DENIED" => StatusCode::FORBIDDEN,
            "UNAUTHENTICATED" => StatusCode::UNAUTHORIZED,
            "INVALID_INPUT" | "INVALID_SLUG" | "VALIDATION_ERROR" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<PageServiceError> for HttpError {
    fn from(err: PageServiceError) -> Self {
        let code = match &err {
            PageServiceError::PageNotFound { .. } => "PAGE_NOT_FOUND",
            PageServiceError::SiteNotFound { .. } => "SITE_NOT_FOUND",
            PageServiceError::AccessDenied { .. } => "ACCESS_DENIED",
            PageServiceError::InvalidSlug { .. } => "INVALID_SLUG",
            PageServiceError::BlockModel(_) => "VALIDATION_ERROR",
            PageServiceError::SerializationError(_) => "SERIALIZATION_ERROR",
            PageServiceError::StorageError(_) => "STORAGE_ERROR",
        };
        let mut http_error = HttpError::new(err.to_string(), code);
        if http_error.status().is_server_error() {
            http_error.details = Some(format!("{:?}", err));
        }
        http_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_service_errors_map_to_status() {
        let cases = [
            (PageServiceError::page_not_found("p"), StatusCode::NOT_FOUND),
            (PageServiceError::access_denied("p"), StatusCode::FORBIDDEN),
            (
                PageServiceError::invalid_slug("A B", "bad"),
                StatusCode::BAD_REQUEST,
            ),
            (
                PageServiceError::storage_error("disk"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from(err).status(), status);
        }
    }

    #[test]
    fn test_server_errors_carry_details() {
        let body = serde_json::to_value(HttpError::from(PageServiceError::storage_error("disk full")))
            .unwrap();
        assert_eq!(body["code"], "STORAGE_ERROR");
        assert_eq!(body["details"], r#"StorageError("disk full")"#);

        let body = serde_json::to_value(HttpError::from(PageServiceError::access_denied("p")))
            .unwrap();
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let body = serde_json::to_value(HttpError::new("nope", "INVALID_INPUT")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "nope", "code": "INVALID_INPUT"})
        );
    }
}
