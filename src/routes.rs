//! HTTP router construction.
//!
//! Route table:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | welcome text |
//! | GET | `/health` | health check |
//! | GET, POST | `/api/products` | list, create |
//! | GET, PUT, DELETE | `/api/products/{id}` | get, update, delete |
//!
//! Product paths also answer with a trailing slash. Unknown paths get a
//! JSON 404 and known paths with the wrong method a JSON 405.
//!
//! Middleware, outermost first: tower-http tracing, panic catcher,
//! request logger, API key guard. The guard only acts on the
//! `/api/products` prefix.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{error, handlers, middleware, state::AppState};

/// Build the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    let collection = get(handlers::products::list_products)
        .post(handlers::products::create_product);
    let item = get(handlers::products::get_product)
        .put(handlers::products::update_product)
        .delete(handlers::products::delete_product);

    let routes = Router::new()
        // Public routes
        .route("/", get(handlers::root::welcome))
        .route("/health", get(handlers::health::health_check))
        // Product routes, with and without a trailing slash
        .route("/api/products", collection.clone())
        .route("/api/products/", collection)
        .route("/api/products/{id}", item.clone())
        .route("/api/products/{id}/", item);

    with_middleware(routes, state)
}

/// Install fallbacks and the middleware stack around `routes`.
fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .method_not_allowed_fallback(handlers::root::method_not_allowed)
        .fallback(handlers::root::not_found)
        // `layer` (not `route_layer`) so the fallbacks are guarded and logged too.
        // Layers added later run first: logger, then auth.
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_api_key,
        ))
        .layer(axum_middleware::from_fn(middleware::logger::log_request))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
