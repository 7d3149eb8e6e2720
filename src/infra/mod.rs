//! Infrastructure layer - Storage adapter, schema bootstrap, repositories

pub mod repositories;
pub mod schema;
pub mod store;

pub use store::Store;
