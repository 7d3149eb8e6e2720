//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{category_handler, order_handler, product_handler};
use crate::domain::{Category, CreatedOrder, Order, OrderItem, OrderStatus, OrderWithItems, Product};

/// OpenAPI documentation for the Kiosk API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kiosk API",
        version = "0.1.0",
        description = "REST backend for a restaurant ordering kiosk and staff panel",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // Category endpoints
        category_handler::list_categories,
        category_handler::get_category,
        category_handler::create_category,
        category_handler::update_category,
        category_handler::delete_category,
        // Product endpoints
        product_handler::list_products,
        product_handler::list_products_by_category,
        product_handler::get_product,
        product_handler::create_product,
        product_handler::update_product,
        product_handler::delete_product,
        // Order endpoints
        order_handler::list_orders,
        order_handler::get_order,
        order_handler::create_order,
        order_handler::update_order_status,
    ),
    components(
        schemas(
            // Domain types
            Category,
            Product,
            Order,
            OrderItem,
            OrderStatus,
            OrderWithItems,
            CreatedOrder,
            // Request/response types
            category_handler::CreateCategoryRequest,
            category_handler::UpdateCategoryRequest,
            category_handler::CategoryCreated,
            product_handler::CreateProductRequest,
            product_handler::UpdateProductRequest,
            product_handler::ProductCreated,
            order_handler::CreateOrderRequest,
            order_handler::OrderItemRequest,
            order_handler::UpdateOrderStatusRequest,
        )
    ),
    tags(
        (name = "Categories", description = "Menu category management"),
        (name = "Products", description = "Menu product management"),
        (name = "Orders", description = "Kiosk order submission and staff status updates")
    )
)]
pub struct ApiDoc;
