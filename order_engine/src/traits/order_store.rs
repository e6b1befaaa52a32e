use thiserror::Error;

use crate::db_types::{Order, OrderId};

/// The persistence contract for order records.
///
/// One record per order, keyed on `order_id`. Lower-level I/O failures surface as
/// [`OrderStoreError::DatabaseError`]; a missing record is not an error at this level and is signalled with
/// `Ok(None)` from [`fetch_order_by_id`](OrderStore::fetch_order_by_id).
#[allow(async_fn_in_trait)]
pub trait OrderStore: Clone {
    /// The URL of the backing store
    fn url(&self) -> &str;

    /// Saves the order, inserting or replacing the record with the same `order_id`. This call is idempotent.
    ///
    /// Returns the persisted representation, which is what callers should hand back to their own callers (the
    /// backend may round-trip timestamp precision).
    async fn upsert_order(&self, order: Order) -> Result<Order, OrderStoreError>;

    /// Fetches the order with the given id, or `None` if there is no such record.
    async fn fetch_order_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError>;

    /// Removes the record with the given id, if present. Deleting an absent id is not an error.
    async fn delete_order(&self, order_id: &OrderId) -> Result<(), OrderStoreError>;
}

#[derive(Debug, Clone, Error)]
pub enum OrderStoreError {
    #[error("The order store could not complete the operation. {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for OrderStoreError {
    fn from(e: sqlx::Error) -> Self {
        OrderStoreError::DatabaseError(e.to_string())
    }
}
