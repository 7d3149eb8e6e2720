//! Order domain entities: orders, line items, and the status lifecycle.

use chrono::{NaiveDateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::ORDER_NUMBER_PREFIX;

/// Order status lifecycle.
///
/// No transition graph is enforced: any status may follow any other. The
/// enum is closed, so nothing outside these five values is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a status value, rejecting anything outside the fixed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "ready" => Some(OrderStatus::Ready),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kiosk order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Unique order identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Human-readable public order identifier (`ORD-YYYYMMDD-NNNN`)
    #[schema(example = "ORD-20260824-1234")]
    pub order_number: String,
    /// Total as submitted by the kiosk (not recomputed server-side)
    #[schema(example = 11.98)]
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    /// Bumped on every status change
    pub updated_at: NaiveDateTime,
}

/// One product-quantity-price triple attached to an order.
///
/// `price` is a snapshot frozen at order-creation time, independent of any
/// later product price change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    #[schema(example = 2)]
    pub quantity: i32,
    #[schema(example = 5.99)]
    pub price: Decimal,
    /// Joined product name for display
    pub product_name: String,
}

/// Order with its line items, as returned by the staff panel endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Line item submitted at order creation
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i32,
    pub price: Decimal,
}

/// Identifiers assigned to a freshly created order
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedOrder {
    #[schema(example = 1)]
    pub order_id: i64,
    #[schema(example = "ORD-20260824-1234")]
    pub order_number: String,
}

/// Generate a public order number: `ORD-<YYYYMMDD>-<4-digit-random>`.
///
/// Uniqueness is probabilistic; there is no collision retry. The unique
/// constraint on the column turns a same-day collision into a failed insert.
pub fn generate_order_number() -> String {
    let date = Utc::now().format("%Y%m%d");
    let token = rand::thread_rng().gen_range(1000..=9999);
    format!("{ORDER_NUMBER_PREFIX}-{date}-{token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_number_has_expected_shape() {
        let number = generate_order_number();
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ORD");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn status_parse_accepts_only_the_fixed_set() {
        assert_eq!(OrderStatus::parse("pending"), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::parse("cancelled"), Some(OrderStatus::Cancelled));
        assert_eq!(OrderStatus::parse("bogus"), None);
        assert_eq!(OrderStatus::parse("PENDING"), None);
        assert_eq!(OrderStatus::parse(""), None);
    }
}
