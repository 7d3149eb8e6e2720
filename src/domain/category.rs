//! Category domain entity and related types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Menu category shown on the kiosk browse screen
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique category identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Category name (unique)
    #[schema(example = "Burgers")]
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional glyph or label shown next to the name
    #[schema(example = "🍔")]
    pub icon: Option<String>,
    /// Sort key for kiosk display (lowest first)
    #[schema(example = 0)]
    pub order_position: i32,
    /// Creation timestamp (server-assigned)
    pub created_at: NaiveDateTime,
}

/// Fields for creating a category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order_position: i32,
}

/// Partial update for a category.
///
/// Only present fields are written; an all-empty patch is reported as a
/// failure so callers can distinguish "nothing changed" from "applied".
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order_position: Option<i32>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.icon.is_none()
            && self.order_position.is_none()
    }
}
