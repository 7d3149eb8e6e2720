//! Order repository.
//!
//! Order creation persists the order row and all its line items inside a
//! single transaction: any item failure rolls the whole order back. The
//! status column only ever holds values of the closed [`OrderStatus`] enum;
//! the caller-supplied status is ignored on create and forced to pending.

use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseTransaction, DbErr, QueryResult};

use crate::domain::{
    generate_order_number, CreatedOrder, NewOrderItem, Order, OrderItem, OrderStatus,
    OrderWithItems,
};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

const INSERT_ORDER: &str = "INSERT INTO orders (order_number, total_price, status) \
     VALUES ($1, $2, 'pending') RETURNING id";

const INSERT_ITEM: &str = "INSERT INTO order_items (order_id, product_id, quantity, price) \
     VALUES ($1, $2, $3, $4)";

const ITEMS_FOR_ORDER: &str = "SELECT oi.*, p.name AS product_name \
     FROM order_items oi \
     JOIN products p ON oi.product_id = p.id \
     WHERE oi.order_id = $1 \
     ORDER BY oi.id";

pub struct OrderRepository {
    store: Arc<Store>,
}

impl OrderRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Create an order with its line items atomically.
    ///
    /// `total_price` is trusted from the caller and not recomputed from the
    /// items. The generated order number has no collision retry; the unique
    /// constraint turns a same-day collision into a failed insert.
    pub async fn create(
        &self,
        total_price: Decimal,
        items: &[NewOrderItem],
    ) -> AppResult<CreatedOrder> {
        let order_number = generate_order_number();
        let txn = self.store.begin().await?;

        match self
            .insert_order_with_items(&txn, &order_number, total_price, items)
            .await
        {
            Ok(order_id) => {
                txn.commit().await?;
                Ok(CreatedOrder {
                    order_id,
                    order_number,
                })
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(error = %rollback_err, "Order rollback failed");
                }
                Err(e.into())
            }
        }
    }

    async fn insert_order_with_items(
        &self,
        txn: &DatabaseTransaction,
        order_number: &str,
        total_price: Decimal,
        items: &[NewOrderItem],
    ) -> Result<i64, DbErr> {
        let row = txn
            .query_one(self.store.statement(
                INSERT_ORDER,
                vec![order_number.into(), total_price.into()],
            ))
            .await?
            .ok_or_else(|| DbErr::Custom("order insert did not yield an id".to_owned()))?;
        let order_id: i64 = row.try_get("", "id")?;

        for item in items {
            txn.execute(self.store.statement(
                INSERT_ITEM,
                vec![
                    order_id.into(),
                    item.product_id.into(),
                    item.quantity.into(),
                    item.price.into(),
                ],
            ))
            .await?;
        }

        Ok(order_id)
    }

    /// All orders, newest first.
    pub async fn list(&self) -> AppResult<Vec<Order>> {
        let rows = self
            .store
            .fetch_all("SELECT * FROM orders ORDER BY created_at DESC", vec![])
            .await;
        rows.iter()
            .map(map_order)
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(Into::into)
    }

    /// Orders in one status, newest first. The status is already a member
    /// of the closed enum by the time it gets here.
    pub async fn list_by_status(&self, status: OrderStatus) -> AppResult<Vec<Order>> {
        let rows = self
            .store
            .fetch_all(
                "SELECT * FROM orders WHERE status = $1 ORDER BY created_at DESC",
                vec![status.as_str().into()],
            )
            .await;
        rows.iter()
            .map(map_order)
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(Into::into)
    }

    pub async fn get(&self, id: i64) -> AppResult<Option<Order>> {
        let row = self
            .store
            .fetch_one("SELECT * FROM orders WHERE id = $1", vec![id.into()])
            .await;
        row.as_ref().map(map_order).transpose().map_err(Into::into)
    }

    /// Line items of one order, joined with the product name for display.
    pub async fn items(&self, order_id: i64) -> AppResult<Vec<OrderItem>> {
        let rows = self
            .store
            .fetch_all(ITEMS_FOR_ORDER, vec![order_id.into()])
            .await;
        rows.iter()
            .map(map_order_item)
            .collect::<Result<Vec<_>, DbErr>>()
            .map_err(Into::into)
    }

    /// All orders (optionally filtered by status) with their nested items.
    pub async fn list_with_items(
        &self,
        status: Option<OrderStatus>,
    ) -> AppResult<Vec<OrderWithItems>> {
        let orders = match status {
            Some(status) => self.list_by_status(status).await?,
            None => self.list().await?,
        };

        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.items(order.id).await?;
            result.push(OrderWithItems { order, items });
        }
        Ok(result)
    }

    pub async fn get_with_items(&self, id: i64) -> AppResult<Option<OrderWithItems>> {
        let Some(order) = self.get(id).await? else {
            return Ok(None);
        };
        let items = self.items(order.id).await?;
        Ok(Some(OrderWithItems { order, items }))
    }

    /// Move an order to a new status and bump `updated_at`.
    ///
    /// No transition graph: any status may follow any other.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<()> {
        if self
            .store
            .execute(
                "UPDATE orders SET status = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
                vec![status.as_str().into(), id.into()],
            )
            .await
        {
            Ok(())
        } else {
            Err(AppError::internal("order status update failed"))
        }
    }
}

fn map_order(row: &QueryResult) -> Result<Order, DbErr> {
    let status: String = row.try_get("", "status")?;
    Ok(Order {
        id: row.try_get("", "id")?,
        order_number: row.try_get("", "order_number")?,
        total_price: row.try_get("", "total_price")?,
        status: OrderStatus::parse(&status).unwrap_or(OrderStatus::Pending),
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
    })
}

fn map_order_item(row: &QueryResult) -> Result<OrderItem, DbErr> {
    Ok(OrderItem {
        id: row.try_get("", "id")?,
        order_id: row.try_get("", "order_id")?,
        product_id: row.try_get("", "product_id")?,
        quantity: row.try_get("", "quantity")?,
        price: row.try_get("", "price")?,
        product_name: row.try_get("", "product_name")?,
    })
}
