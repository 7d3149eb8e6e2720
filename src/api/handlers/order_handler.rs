//! Order handlers (kiosk submission + staff panel).

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, put},
    Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreatedOrder, NewOrderItem, OrderStatus, OrderWithItems};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{ApiResponse, Created};

/// Order creation request from the kiosk.
///
/// `total_price` is trusted as submitted and not recomputed from the items.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "items must not be empty"))]
    pub items: Vec<OrderItemRequest>,
    #[schema(example = 11.98)]
    pub total_price: Decimal,
}

/// One line item of an order submission
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    #[schema(example = 1)]
    pub product_id: i64,
    #[schema(example = 2)]
    pub quantity: i32,
    /// Price snapshot at order time
    #[schema(example = 5.99)]
    pub price: Decimal,
}

/// Status update request from the staff panel
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[schema(example = "preparing")]
    pub status: String,
}

/// Optional status filter for order listing
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub status: Option<String>,
}

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order))
        .route("/:id/status", put(update_order_status))
}

fn parse_status(value: &str) -> AppResult<OrderStatus> {
    OrderStatus::parse(value).ok_or_else(|| {
        AppError::validation(
            "Invalid status: must be one of pending, preparing, ready, delivered, cancelled",
        )
    })
}

/// List orders with their nested items, newest first
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    params(("status" = Option<String>, Query, description = "Filter by order status")),
    responses(
        (status = 200, description = "Orders with nested items", body = [OrderWithItems]),
        (status = 400, description = "Invalid status filter"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> AppResult<Json<ApiResponse<Vec<OrderWithItems>>>> {
    // Validate the filter before querying; an invalid value is rejected,
    // not an empty result.
    let status = query.status.as_deref().map(parse_status).transpose()?;

    let orders = state.orders.list_with_items(status).await?;
    let count = orders.len();
    Ok(Json(ApiResponse::with_count(orders, count)))
}

/// Get one order with its items
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order with items", body = OrderWithItems),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let order = state.orders.get_with_items(id).await?.ok_or_not_found()?;
    Ok(Json(ApiResponse::success(order)))
}

/// Create a new order (kiosk)
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = CreatedOrder),
        (status = 400, description = "Missing items or total_price"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<Created<CreatedOrder>> {
    let mut items = Vec::with_capacity(payload.items.len());
    for item in &payload.items {
        if item.quantity < 1 {
            return Err(AppError::validation("quantity must be a positive integer"));
        }
        items.push(NewOrderItem {
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price,
        });
    }

    let created = state.orders.create(payload.total_price, &items).await?;
    Ok(Created(created, "Order created"))
}

/// Update an order's status (staff panel)
#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = "Orders",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Invalid status value"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let status = parse_status(&payload.status)?;
    state.orders.update_status(id, status).await?;
    Ok(Json(ApiResponse::message(format!(
        "Order updated to: {status}"
    ))))
}
