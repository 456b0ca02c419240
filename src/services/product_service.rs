//! Product service - validation and store access for the product endpoints.

use crate::{
    error::AppError,
    models::product::{CreateProductRequest, NewProduct, Product, UpdateProductRequest},
    store::ProductStore,
};

/// Message returned when a create payload lacks `name` or `price`.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and price are required";

/// Validate a create payload and apply defaults.
///
/// # Rules
///
/// - `name` must be present and non-empty
/// - `price` must be present; zero and negative values are accepted
/// - `description` and `category` default to ""
/// - `inStock` defaults to true
///
/// # Errors
///
/// - `Validation`: `name` or `price` missing
pub fn validate_create(request: CreateProductRequest) -> Result<NewProduct, AppError> {
    let (Some(name), Some(price)) = (request.name, request.price) else {
        return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    };

    if name.is_empty() {
        return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    Ok(NewProduct {
        name,
        description: request.description.unwrap_or_default(),
        price,
        category: request.category.unwrap_or_default(),
        in_stock: request.in_stock.unwrap_or(true),
    })
}

pub async fn list_products(store: &ProductStore) -> Vec<Product> {
    store.list().await
}

/// # Errors
///
/// - `ProductNotFound`: no product has `id`
pub async fn get_product(store: &ProductStore, id: &str) -> Result<Product, AppError> {
    store.get(id).await.ok_or(AppError::ProductNotFound)
}

/// Validate the payload and append a new product.
///
/// # Errors
///
/// - `Validation`: `name` or `price` missing
pub async fn create_product(
    store: &ProductStore,
    request: CreateProductRequest,
) -> Result<Product, AppError> {
    let new = validate_create(request)?;
    let product = store.create(new).await;

    tracing::info!(product_id = %product.id, "Product created");
    Ok(product)
}

/// Apply a partial update. Any subset of fields may be supplied.
///
/// # Errors
///
/// - `ProductNotFound`: no product has `id`
pub async fn update_product(
    store: &ProductStore,
    id: &str,
    changes: UpdateProductRequest,
) -> Result<Product, AppError> {
    let product = store
        .update(id, changes)
        .await
        .ok_or(AppError::ProductNotFound)?;

    tracing::info!(product_id = %product.id, "Product updated");
    Ok(product)
}

/// Remove a product and return the removed record.
///
/// # Errors
///
/// - `ProductNotFound`: no product has `id`
pub async fn delete_product(store: &ProductStore, id: &str) -> Result<Product, AppError> {
    let product = store.delete(id).await.ok_or(AppError::ProductNotFound)?;

    tracing::info!(product_id = %product.id, "Product deleted");
    Ok(product)
}
