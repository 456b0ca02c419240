//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::ProductStore;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of products currently held
    pub products: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// Not behind the API key guard.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "products": 3,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(store): State<ProductStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        products: store.len().await,
        timestamp: Utc::now(),
    })
}
