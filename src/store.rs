//! In-memory product store.
//!
//! The store owns the ordered list of products for the lifetime of the
//! process. It is cloned into every request through axum state; all clones
//! share the same list behind a single `RwLock`, so writes are serialized
//! and each lookup-then-mutate happens under one guard.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::product::{NewProduct, Product, UpdateProductRequest, seed_products};

/// Shared handle to the product collection.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    /// Create a store holding the startup catalogue.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// All products in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn get(&self, id: &str) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    /// Append a new product under a freshly generated identifier.
    ///
    /// The identifier is a random UUID v4; it is regenerated if it somehow
    /// collides with one already held, so identifiers stay unique.
    pub async fn create(&self, new: NewProduct) -> Product {
        let mut products = self.products.write().await;

        let mut id = Uuid::new_v4().to_string();
        while products.iter().any(|product| product.id == id) {
            id = Uuid::new_v4().to_string();
        }

        let product = Product::new(id, new);
        products.push(product.clone());
        product
    }

    /// Apply a partial update. Returns `None` if no product has `id`.
    pub async fn update(&self, id: &str, changes: UpdateProductRequest) -> Option<Product> {
        let mut products = self.products.write().await;
        let product = products.iter_mut().find(|product| product.id == id)?;
        product.apply(changes);
        Some(product.clone())
    }

    /// Remove a product, returning the removed record. Returns `None` if no product has `id`.
    pub async fn delete(&self, id: &str) -> Option<Product> {
        let mut products = self.products.write().await;
        let index = products.iter().position(|product| product.id == id)?;
        Some(products.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;
    use std::collections::HashSet;

    fn desk() -> NewProduct {
        NewProduct {
            name: "Desk".to_string(),
            description: String::new(),
            price: Number::from(150),
            category: String::new(),
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn seeded_store_lists_in_order() {
        let store = ProductStore::seeded();
        let ids: Vec<String> = store.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn create_assigns_unique_ids_and_appends() {
        let store = ProductStore::seeded();

        let first = store.create(desk()).await;
        let second = store.create(desk()).await;

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);

        let products = store.list().await;
        assert_eq!(products.len(), 5);
        assert_eq!(products[3], first);
        assert_eq!(products[4], second);

        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = ProductStore::seeded();
        assert!(store.get("99").await.is_none());
    }

    #[tokio::test]
    async fn update_then_get_reflects_changes_and_is_idempotent() {
        let store = ProductStore::seeded();
        let changes = UpdateProductRequest {
            category: Some("computers".to_string()),
            in_stock: Some(false),
            ..Default::default()
        };

        let updated = store.update("1", changes.clone()).await.unwrap();
        assert_eq!(store.get("1").await.unwrap(), updated);
        assert_eq!(updated.category, "computers");
        assert!(!updated.in_stock);
        assert_eq!(updated.name, "Laptop");
        assert_eq!(updated.price, Number::from(1200));

        let again = store.update("1", changes).await.unwrap();
        assert_eq!(again, updated);
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let store = ProductStore::seeded();
        let changes = UpdateProductRequest {
            name: Some("Ghost".to_string()),
            ..Default::default()
        };
        assert!(store.update("99", changes).await.is_none());
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn delete_then_get_yields_none() {
        let store = ProductStore::seeded();

        let removed = store.delete("2").await.unwrap();
        assert_eq!(removed.name, "Smartphone");
        assert!(store.get("2").await.is_none());
        assert!(store.delete("2").await.is_none());
    }

    #[tokio::test]
    async fn count_tracks_creates_minus_deletes() {
        let store = ProductStore::default();
        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(store.create(desk()).await.id);
        }
        for id in &ids[..2] {
            store.delete(id).await.unwrap();
        }
        assert_eq!(store.list().await.len(), 3);
    }

    #[tokio::test]
    async fn concurrent_creates_do_not_lose_records() {
        let store = ProductStore::default();

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.create(desk()).await.id })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            ids.insert(task.await.unwrap());
        }

        assert_eq!(ids.len(), 50);
        assert_eq!(store.len().await, 50);
    }
}
