//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

/// Log the arrival time, method and URI of every request, then pass it on.
///
/// Purely observational; the request is forwarded unchanged.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        method = %request.method(),
        uri = %request.uri(),
        "Incoming request"
    );

    next.run(request).await
}
