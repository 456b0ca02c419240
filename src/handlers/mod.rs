//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls the product service
//! 3. Returns HTTP response (JSON, status code)

/// Service health endpoint
pub mod health;
/// Product CRUD endpoints
pub mod products;
/// Welcome text and unknown-route fallback
pub mod root;
