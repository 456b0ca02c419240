//! HTTP handlers for the product collection.
//!
//! All routes here sit under `/api/products` and are reached only after
//! the API key guard has accepted the request.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::extract::JsonBody;
use crate::models::product::{CreateProductRequest, Product, UpdateProductRequest};
use crate::services::product_service;
use crate::store::ProductStore;

/// List every product.
///
/// # Endpoint
///
/// `GET /api/products`
///
/// # Response
///
/// - **Success (200 OK)**: JSON array in insertion order (may be empty)
pub async fn list_products(State(store): State<ProductStore>) -> Json<Vec<Product>> {
    Json(product_service::list_products(&store).await)
}

/// Get a single product.
///
/// # Endpoint
///
/// `GET /api/products/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: the product
/// - **Error (404)**: `{"error":"Product not found"}`
pub async fn get_product(
    State(store): State<ProductStore>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = product_service::get_product(&store, &id).await?;

    Ok(Json(product))
}

/// Create a product.
///
/// # Endpoint
///
/// `POST /api/products`
///
/// # Request Body
///
/// ```json
/// { "name": "Desk", "price": 150 }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the new product with its generated `id`
/// - **Error (400)**: `{"error":"Name and price are required"}`, also when
///   there is no JSON body at all
/// - **Error (400/422)**: JSON body is malformed or of the wrong shape
pub async fn create_product(
    State(store): State<ProductStore>,
    JsonBody(request): JsonBody<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let product = product_service::create_product(&store, request).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Partially update a product.
///
/// # Endpoint
///
/// `PUT /api/products/{id}`
///
/// Only fields present in the body change. `null` counts as absent, and
/// a request without a JSON body changes nothing.
///
/// # Response
///
/// - **Success (200 OK)**: the updated product
/// - **Error (404)**: `{"error":"Product not found"}`
pub async fn update_product(
    State(store): State<ProductStore>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<UpdateProductRequest>,
) -> Result<Json<Product>, AppError> {
    let product = product_service::update_product(&store, &id, changes).await?;

    Ok(Json(product))
}

/// Delete a product.
///
/// # Endpoint
///
/// `DELETE /api/products/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: the removed product
/// - **Error (404)**: `{"error":"Product not found"}`
pub async fn delete_product(
    State(store): State<ProductStore>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = product_service::delete_product(&store, &id).await?;

    Ok(Json(product))
}
