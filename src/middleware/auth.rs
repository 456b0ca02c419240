//! API key authentication middleware.
//!
//! Every request under `/api/products` must carry an `x-api-key` header
//! equal to the configured secret. This middleware:
//! 1. Lets requests outside the product prefix through untouched
//! 2. Reads the `x-api-key` header
//! 3. Verifies it against the configured secret in constant time
//! 4. Rejects mismatches (and missing headers) with HTTP 401

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use hmac::{
    Hmac, Mac,
    digest::{Key, KeyInit},
};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Header clients put the shared secret in.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Path prefix the guard protects.
pub const PRODUCTS_PREFIX: &str = "/api/products";

/// Verifies presented API keys against the configured secret.
///
/// The secret itself is not kept. At startup it is reduced to an
/// HMAC-SHA256 tag under a random per-process key; a presented key is
/// accepted if it produces the same tag. `Mac::verify_slice` compares
/// tags in constant time.
pub struct ApiKeyGuard {
    /// MAC already keyed with the per-process key; cloned for each check
    mac: HmacSha256,
    expected_tag: Vec<u8>,
}

impl ApiKeyGuard {
    pub fn new(secret: &str) -> Self {
        // Block-sized key, so the infallible constructor applies.
        let mut key = Key::<HmacSha256>::default();
        rand::fill(&mut key[..]);
        let mac = <HmacSha256 as KeyInit>::new(&key);

        let mut tagger = mac.clone();
        tagger.update(secret.as_bytes());
        let expected_tag = tagger.finalize().into_bytes().to_vec();

        Self { mac, expected_tag }
    }

    /// Check a presented key against the configured secret.
    pub fn verify(&self, presented: &[u8]) -> bool {
        let mut mac = self.mac.clone();
        mac.update(presented);
        mac.verify_slice(&self.expected_tag).is_ok()
    }
}

/// Whether `path` falls under the product prefix.
///
/// Matches on whole segments: `/api/products` and `/api/products/1` are
/// guarded, `/api/productsX` is not.
pub fn is_guarded(path: &str) -> bool {
    match path.strip_prefix(PRODUCTS_PREFIX) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// API key authentication middleware function.
///
/// Layered over the whole router (not just the product routes) so that
/// unknown paths under the prefix are rejected before the 404 fallback.
///
/// # Returns
///
/// - `Ok(Response)` if the path is unguarded or the key matches
/// - `Err(AppError::Unauthorized)` otherwise (returns 401)
pub async fn require_api_key(
    State(guard): State<Arc<ApiKeyGuard>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !is_guarded(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let authorized = request
        .headers()
        .get(API_KEY_HEADER)
        .is_some_and(|value| guard.verify(value.as_bytes()));

    if !authorized {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request with missing or invalid API key"
        );
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_accepts_only_the_exact_secret() {
        let guard = ApiKeyGuard::new("s3cret");

        assert!(guard.verify(b"s3cret"));
        assert!(!guard.verify(b"s3cre"));
        assert!(!guard.verify(b"s3cret "));
        assert!(!guard.verify(b"S3CRET"));
        assert!(!guard.verify(b""));
    }

    #[test]
    fn guards_are_keyed_independently() {
        let a = ApiKeyGuard::new("same");
        let b = ApiKeyGuard::new("same");

        assert_ne!(a.expected_tag, b.expected_tag);
        assert!(a.verify(b"same"));
        assert!(b.verify(b"same"));
    }

    #[test]
    fn prefix_matches_whole_segments() {
        assert!(is_guarded("/api/products"));
        assert!(is_guarded("/api/products/"));
        assert!(is_guarded("/api/products/1"));
        assert!(is_guarded("/api/products/1/extra"));

        assert!(!is_guarded("/"));
        assert!(!is_guarded("/health"));
        assert!(!is_guarded("/api"));
        assert!(!is_guarded("/api/productsX"));
    }
}
