//! Root welcome page and the fallbacks for unmatched routes and methods.

use crate::error::AppError;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Product API! Go to /api/products to see all products.";

/// `GET /` - plain text welcome message.
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// Any request no route matches.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// A known path requested with a method it does not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
