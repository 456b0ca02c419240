//! Product data models and API request types.
//!
//! This module defines:
//! - `Product`: the record held by the store and returned to clients
//! - `CreateProductRequest`: request body for `POST /api/products`
//! - `UpdateProductRequest`: request body for `PUT /api/products/{id}`
//! - `NewProduct`: validated creation input with defaults applied

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A product record.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "Desk",
///   "description": "",
///   "price": 150,
///   "category": "",
///   "inStock": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store and never changed
    pub id: String,

    pub name: String,

    pub description: String,

    /// Price exactly as the client sent it
    ///
    /// Kept as a JSON number so integers round-trip as integers
    /// and no sign or range rule is imposed.
    pub price: Number,

    pub category: String,

    pub in_stock: bool,
}

impl Product {
    /// Build a record from validated input and a freshly generated identifier.
    pub fn new(id: String, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            in_stock: new.in_stock,
        }
    }

    /// Overwrite every field the update supplies; leave the rest alone.
    pub fn apply(&mut self, changes: UpdateProductRequest) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(in_stock) = changes.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Request body for creating a product.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Desk",
///   "price": 150,
///   "category": "furniture"
/// }
/// ```
///
/// # Validation
///
/// - `name`: Required, non-empty
/// - `price`: Required, any number (zero is valid)
/// - `description`, `category`: Optional, default to ""
/// - `inStock`: Optional, defaults to true
///
/// Every field is optional at the type level so that a missing field
/// surfaces as a validation error rather than a deserialization failure.
/// An explicit `null` is treated the same as an omitted key.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Number>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// Request body for a partial update.
///
/// `None` keeps the stored value, `Some` overrides it, including
/// `Some("")`, `Some(0)` and `Some(false)`. An `id` key is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Number>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// Creation input that has passed validation, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

/// Records the store starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: Number::from(1200),
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: Number::from(800),
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: Number::from(50),
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}
