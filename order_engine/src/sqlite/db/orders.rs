use log::trace;
use sqlx::SqliteConnection;

use crate::{
    db_types::{Order, OrderId},
    traits::OrderStoreError,
};

/// Inserts the order, or replaces the record with the same `order_id` if one already exists. Returns the row as
/// persisted. `created_at` is written on first insert and left alone afterwards.
pub async fn upsert_order(order: Order, conn: &mut SqliteConnection) -> Result<Order, OrderStoreError> {
    let order = sqlx::query_as(
        r#"
            INSERT INTO orders (
                order_id,
                customer_id,
                total_price,
                status,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (order_id) DO UPDATE SET
                customer_id = excluded.customer_id,
                total_price = excluded.total_price,
                status = excluded.status
            RETURNING *;
        "#,
    )
    .bind(order.order_id)
    .bind(order.customer_id)
    .bind(order.total_price.value())
    .bind(order.status)
    .bind(order.created_at)
    .fetch_one(conn)
    .await?;
    Ok(order)
}

/// Returns the orders table entry for the corresponding `order_id`, if any.
pub async fn fetch_order_by_id(order_id: &OrderId, conn: &mut SqliteConnection) -> Result<Option<Order>, sqlx::Error> {
    let order =
        sqlx::query_as("SELECT * FROM orders WHERE order_id = $1").bind(order_id.as_str()).fetch_optional(conn).await?;
    Ok(order)
}

/// Deletes the order with the given id. Returns `true` if a row was actually removed; deleting an absent id is a
/// quiet no-op.
pub async fn delete_order(order_id: &OrderId, conn: &mut SqliteConnection) -> Result<bool, OrderStoreError> {
    let result = sqlx::query("DELETE FROM orders WHERE order_id = $1").bind(order_id.as_str()).execute(conn).await?;
    let deleted = result.rows_affected() > 0;
    trace!("🗃️ Delete for order {order_id}: {} row(s) removed", result.rows_affected());
    Ok(deleted)
}
