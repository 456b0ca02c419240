//! Request body extraction.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Lenient JSON body extractor for the product payloads.
///
/// A body is parsed only when it is non-empty and sent with a JSON
/// content type. Anything else (no body, no `Content-Type`, a form or
/// plain-text body) yields `T::default()`, i.e. a payload with no
/// fields supplied. That lets a create without a body fail validation
/// with the usual 400 and an empty PUT leave the record unchanged.
///
/// A JSON body that is present but malformed is still rejected.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(JsonBody(request): JsonBody<CreateProductRequest>) { .. }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(request.headers());
        let bytes = Bytes::from_request(request, state).await?;

        if !is_json || bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        Ok(Self(serde_json::from_slice(&bytes)?))
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
