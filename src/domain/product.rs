//! Product domain entity and related types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Menu product.
///
/// `category_name` and `category_icon` are joined from the owning category
/// for kiosk display and are absent on rows fetched without the join.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique product identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Product name
    #[schema(example = "Classic Burger")]
    pub name: String,
    /// Description (empty string when not provided)
    pub description: Option<String>,
    /// Price with two-decimal monetary precision
    #[schema(example = 5.99)]
    pub price: Decimal,
    /// Owning category
    #[schema(example = 1)]
    pub category_id: i64,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Soft-delete flag: false removes the product from kiosk listings
    /// while keeping historical order items resolvable
    pub available: bool,
    /// Creation timestamp (server-assigned)
    pub created_at: NaiveDateTime,
    /// Joined category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// Joined category icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_icon: Option<String>,
}

/// Fields for creating a product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i64,
    pub image_url: Option<String>,
}

/// Partial update for a product.
///
/// Presence of a field is the signal to write it: `Some(0.00)` is a valid
/// price update.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category_id.is_none()
            && self.image_url.is_none()
    }
}
