//! Product repository.
//!
//! Deletion is a soft delete: `available` flips to false so historical
//! order items stay resolvable, and listing queries filter it out while
//! direct id lookup does not.

use std::sync::Arc;

use sea_orm::{DbErr, QueryResult, Value};

use crate::domain::{NewProduct, Product, ProductPatch};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

use super::build_update;

const PRODUCT_SELECT: &str = "SELECT p.*, c.name AS category_name, c.icon AS category_icon \
     FROM products p \
     LEFT JOIN categories c ON p.category_id = c.id";

pub struct ProductRepository {
    store: Arc<Store>,
}

impl ProductRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Available products with category metadata, in kiosk display order.
    pub async fn list_available(&self) -> AppResult<Vec<Product>> {
        let sql = format!(
            "{PRODUCT_SELECT} WHERE p.available = TRUE \
             ORDER BY c.order_position, c.name, p.name"
        );
        let rows = self.store.fetch_all(&sql, vec![]).await;
        rows.iter()
            .map(map_product)
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(Into::into)
    }

    /// Available products of one category.
    pub async fn list_by_category(&self, category_id: i64) -> AppResult<Vec<Product>> {
        let sql = format!(
            "{PRODUCT_SELECT} WHERE p.category_id = $1 AND p.available = TRUE \
             ORDER BY p.name"
        );
        let rows = self.store.fetch_all(&sql, vec![category_id.into()]).await;
        rows.iter()
            .map(map_product)
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(Into::into)
    }

    /// Direct lookup by id, ignoring the availability filter so historical
    /// orders can still display soft-deleted products.
    pub async fn get(&self, id: i64) -> AppResult<Option<Product>> {
        let sql = format!("{PRODUCT_SELECT} WHERE p.id = $1");
        let row = self.store.fetch_one(&sql, vec![id.into()]).await;
        row.as_ref().map(map_product).transpose().map_err(Into::into)
    }

    /// Create a product, returning its new id.
    pub async fn create(&self, product: NewProduct) -> AppResult<i64> {
        self.store
            .insert(
                "INSERT INTO products (name, description, price, category_id, image_url) \
                 VALUES ($1, $2, $3, $4, $5) RETURNING id",
                vec![
                    product.name.into(),
                    product.description.into(),
                    product.price.into(),
                    product.category_id.into(),
                    product.image_url.into(),
                ],
            )
            .await
            .ok_or_else(|| AppError::internal("product insert failed"))
    }

    /// Rewrite only the supplied fields; presence is the signal, so a price
    /// of exactly 0.00 is applied. An empty patch is reported as a failure.
    pub async fn update(&self, id: i64, patch: ProductPatch) -> AppResult<()> {
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
        if let Some(price) = patch.price {
            columns.push("price");
            values.push(price.into());
        }
        if let Some(category_id) = patch.category_id {
            columns.push("category_id");
            values.push(category_id.into());
        }
        if let Some(image_url) = patch.image_url {
            columns.push("image_url");
            values.push(image_url.into());
        }

        values.push(id.into());
        let sql = build_update("products", &columns);
        if self.store.execute(&sql, values).await {
            Ok(())
        } else {
            Err(AppError::internal("product update failed"))
        }
    }

    /// Soft delete: the row stays, listings stop showing it.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        if self
            .store
            .execute(
                "UPDATE products SET available = FALSE WHERE id = $1",
                vec![id.into()],
            )
            .await
        {
            Ok(())
        } else {
            Err(AppError::internal("product delete failed"))
        }
    }
}

fn map_product(row: &QueryResult) -> Result<Product, DbErr> {
    Ok(Product {
        id: row.try_get("", "id")?,
        name: row.try_get("", "name")?,
        description: row.try_get("", "description")?,
        price: row.try_get("", "price")?,
        category_id: row.try_get("", "category_id")?,
        image_url: row.try_get("", "image_url")?,
        available: row.try_get("", "available")?,
        created_at: row.try_get("", "created_at")?,
        category_name: row.try_get("", "category_name")?,
        category_icon: row.try_get("", "category_icon")?,
    })
}
