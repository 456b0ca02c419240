//! Shared application state handed to the router.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{middleware::auth::ApiKeyGuard, store::ProductStore};

/// Everything handlers and middleware pull out of `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
    pub api_key: Arc<ApiKeyGuard>,
}

impl AppState {
    pub fn new(store: ProductStore, api_key: ApiKeyGuard) -> Self {
        Self {
            store,
            api_key: Arc::new(api_key),
        }
    }
}

impl FromRef<AppState> for ProductStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<ApiKeyGuard> {
    fn from_ref(state: &AppState) -> Self {
        state.api_key.clone()
    }
}
