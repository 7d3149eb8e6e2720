//! Category repository.

use std::sync::Arc;

use sea_orm::{DbErr, QueryResult, Value};

use crate::domain::{Category, CategoryPatch, NewCategory};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

use super::build_update;

pub struct CategoryRepository {
    store: Arc<Store>,
}

impl CategoryRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// All categories, ordered for kiosk display.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let rows = self
            .store
            .fetch_all(
                "SELECT * FROM categories ORDER BY order_position, name",
                vec![],
            )
            .await;
        rows.iter()
            .map(map_category)
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(Into::into)
    }

    pub async fn get(&self, id: i64) -> AppResult<Option<Category>> {
        let row = self
            .store
            .fetch_one("SELECT * FROM categories WHERE id = $1", vec![id.into()])
            .await;
        row.as_ref().map(map_category).transpose().map_err(Into::into)
    }

    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        let row = self
            .store
            .fetch_one("SELECT * FROM categories WHERE name = $1", vec![name.into()])
            .await;
        row.as_ref().map(map_category).transpose().map_err(Into::into)
    }

    /// Create a category, returning its new id.
    ///
    /// A duplicate name trips the unique constraint and surfaces as a
    /// storage failure.
    pub async fn create(&self, category: NewCategory) -> AppResult<i64> {
        self.store
            .insert(
                "INSERT INTO categories (name, description, icon, order_position) \
                 VALUES ($1, $2, $3, $4) RETURNING id",
                vec![
                    category.name.into(),
                    category.description.into(),
                    category.icon.into(),
                    category.order_position.into(),
                ],
            )
            .await
            .ok_or_else(|| AppError::internal("category insert failed"))
    }

    /// Rewrite only the supplied fields. An empty patch is reported as a
    /// failure, never a silent success.
    pub async fn update(&self, id: i64, patch: CategoryPatch) -> AppResult<()> {
        if patch.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        let mut columns: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(name) = patch.name {
            columns.push("name");
            values.push(name.into());
        }
        if let Some(description) = patch.description {
            columns.push("description");
            values.push(description.into());
        }
        if let Some(icon) = patch.icon {
            columns.push("icon");
            values.push(icon.into());
        }
        if let Some(order_position) = patch.order_position {
            columns.push("order_position");
            values.push(order_position.into());
        }

        values.push(id.into());
        let sql = build_update("categories", &columns);
        if self.store.execute(&sql, values).await {
            Ok(())
        } else {
            Err(AppError::internal("category update failed"))
        }
    }

    /// Hard delete. With unenforced foreign keys on the embedded backend
    /// this can orphan products still referencing the category.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self
            .store
            .execute("DELETE FROM categories WHERE id = $1", vec![id.into()])
            .await
        {
            Ok(())
        } else {
            Err(AppError::internal("category delete failed"))
        }
    }
}

fn map_category(row: &QueryResult) -> Result<Category, DbErr> {
    Ok(Category {
        id: row.try_get("", "id")?,
        name: row.try_get("", "name")?,
        description: row.try_get("", "description")?,
        icon: row.try_get("", "icon")?,
        order_position: row.try_get("", "order_position")?,
        created_at: row.try_get("", "created_at")?,
    })
}
