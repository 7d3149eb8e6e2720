//! Kiosk API - REST backend for a restaurant ordering workflow.
//!
//! A customer-facing kiosk browses categories and products and submits
//! orders; a staff panel lists orders and moves them through their status
//! lifecycle.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **infra**: Infrastructure concerns (storage adapter, schema, repositories)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared types (response envelope)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Populate default categories and sample products
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Category, Order, OrderItem, OrderStatus, Product};
pub use errors::{AppError, AppResult};
pub use infra::Store;
