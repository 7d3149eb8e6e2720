//! Domain layer - Core business entities
//!
//! Plain data types shared by the repositories and the HTTP layer.

pub mod category;
pub mod order;
pub mod product;

pub use category::{Category, CategoryPatch, NewCategory};
pub use order::{
    generate_order_number, CreatedOrder, NewOrderItem, Order, OrderItem, OrderStatus,
    OrderWithItems,
};
pub use product::{NewProduct, Product, ProductPatch};
