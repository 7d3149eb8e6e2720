//! Application state - Dependency injection container.
//!
//! The storage client is constructed once by the composition root
//! (the serve command) and shared with the repositories from here; no
//! lazy globals.

use std::sync::Arc;

use crate::infra::repositories::{CategoryRepository, OrderRepository, ProductRepository};
use crate::infra::Store;

/// Application state containing the repositories and the storage client.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryRepository>,
    pub products: Arc<ProductRepository>,
    pub orders: Arc<OrderRepository>,
    pub store: Arc<Store>,
}

impl AppState {
    /// Build the repository layer on top of a connected store.
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            categories: Arc::new(CategoryRepository::new(store.clone())),
            products: Arc::new(ProductRepository::new(store.clone())),
            orders: Arc::new(OrderRepository::new(store.clone())),
            store,
        }
    }
}
