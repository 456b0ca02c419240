//! HTTP middleware components.
//!
//! Middleware run before route handlers, in this order:
//! - `logger`: records every request
//! - `auth`: rejects product requests without a valid API key

/// API key authentication middleware
pub mod auth;
/// Request logging middleware
pub mod logger;
