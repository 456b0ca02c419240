//! Error types and HTTP error response handling.
//!
//! Every failure the service reports is an [`AppError`]. Handlers return
//! `Result<T, AppError>` and the `IntoResponse` impl below turns the error
//! into a status code and a `{"error": "<message>"}` JSON body.

use std::any::Any;

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message sent to clients for any 500 response.
const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Application-wide error type.
///
/// # Status Code Mapping
///
/// - `Validation` → 400 Bad Request
/// - `Unauthorized` → 401 Unauthorized
/// - `ProductNotFound` / `RouteNotFound` → 404 Not Found
/// - `MethodNotAllowed` → 405 Method Not Allowed
/// - `JsonBody` → 400 for malformed JSON, 422 for a well-formed body of the wrong shape
/// - `BodyRead` → whatever status the body rejection carries
/// - `Internal` → 500 Internal Server Error (details hidden from client)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request payload is missing a required field.
    ///
    /// The String is the message returned to the client verbatim.
    #[error("{0}")]
    Validation(String),

    /// The `x-api-key` header is missing or does not match the configured secret.
    #[error("Unauthorized")]
    Unauthorized,

    /// No product with the requested identifier exists.
    #[error("Product not found")]
    ProductNotFound,

    /// No route matches the request path.
    #[error("Not found")]
    RouteNotFound,

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body could not be parsed as the expected JSON shape.
    #[error("Invalid JSON body: {0}")]
    JsonBody(#[from] serde_json::Error),

    /// Request body could not be read at all.
    #[error(transparent)]
    BodyRead(#[from] BytesRejection),

    /// Anything else. The String is logged, never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::ProductNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::JsonBody(err) if err.is_data() => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::JsonBody(_) => StatusCode::BAD_REQUEST,
            AppError::BodyRead(rejection) => rejection.status(),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "Product not found" }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::BodyRead(ref rejection) => rejection.body_text(),
            AppError::Internal(ref detail) => {
                tracing::error!("Unhandled failure: {}", detail);
                INTERNAL_MESSAGE.to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Turn a handler panic into the standard 500 body.
///
/// Installed through `CatchPanicLayer`, so a panic anywhere below the router
/// still answers with `{"error": "Internal Server Error"}`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic with non-string payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn validation_returns_400_with_message() {
        let (status, json) =
            body_json(AppError::Validation("Name and price are required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Name and price are required" }));
    }

    #[tokio::test]
    async fn unauthorized_returns_401() {
        let (status, json) = body_json(AppError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn product_not_found_returns_404() {
        let (status, json) = body_json(AppError::ProductNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Product not found");
    }

    #[tokio::test]
    async fn method_not_allowed_returns_405() {
        let (status, json) = body_json(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn json_syntax_and_shape_errors_map_to_400_and_422() {
        let syntax = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let (status, json) = body_json(syntax.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON body"));

        let shape = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        let (status, _) = body_json(shape.into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn internal_hides_details() {
        let (status, json) = body_json(AppError::Internal("lock exploded".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn panic_payload_becomes_generic_500() {
        let response = panic_response(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "Internal Server Error" }));
    }
}
