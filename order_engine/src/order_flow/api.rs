use std::fmt::Debug;

use log::*;
use opg_common::Money;

use crate::{
    db_types::{Order, OrderId},
    order_flow::OrderFlowError,
    traits::{OrderStore, PaymentProcessor},
};

pub struct OrderFlowApi<B, P> {
    db: B,
    payments: P,
}

impl<B, P> Debug for OrderFlowApi<B, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B, P> OrderFlowApi<B, P> {
    pub fn new(db: B, payments: P) -> Self {
        Self { db, payments }
    }
}

impl<B, P> OrderFlowApi<B, P>
where
    B: OrderStore,
    P: PaymentProcessor,
{
    /// Creates a brand-new order for the given customer and persists it.
    ///
    /// The order starts life as `Pending` with a freshly generated id. The persisted representation is returned, so
    /// callers always see what the store actually holds. The only failure path is the store itself.
    pub async fn create_order(&self, customer_id: String, total_price: Money) -> Result<Order, OrderFlowError> {
        let order = Order::create(customer_id, total_price);
        let saved = self.db.upsert_order(order).await?;
        debug!("🛒️ Order {} created for customer {} ({})", saved.order_id, saved.customer_id, saved.total_price);
        Ok(saved)
    }

    /// Confirms a `Pending` order, gated by payment authorization.
    ///
    /// The sequence is fixed:
    /// 1. Look the order up; a missing id fails with [`OrderFlowError::OrderNotFound`].
    /// 2. Ask the payment processor to authorize the order total. Exactly one call is made per invocation.
    /// 3. A decline fails with [`OrderFlowError::PaymentDeclined`] and the order is left untouched. No retries.
    /// 4. On approval, run the entity's `Pending -> Confirmed` transition; a non-pending order fails with
    ///    [`OrderFlowError::InvalidStateTransition`] and nothing is written.
    /// 5. Persist and return the confirmed order. This is the only store write on the path.
    pub async fn confirm_order(&self, order_id: &OrderId) -> Result<Order, OrderFlowError> {
        let order = self
            .db
            .fetch_order_by_id(order_id)
            .await?
            .ok_or_else(|| OrderFlowError::OrderNotFound(order_id.clone()))?;
        let approved = self.payments.authorize(order_id, order.total_price).await;
        if !approved {
            info!("🛒️💳️ Payment declined for order {order_id}. The order remains {}", order.status);
            return Err(OrderFlowError::PaymentDeclined(order_id.clone()));
        }
        let confirmed = order.confirm()?;
        let saved = self.db.upsert_order(confirmed).await?;
        debug!("🛒️✅️ Order {} confirmed for customer {}", saved.order_id, saved.customer_id);
        Ok(saved)
    }

    /// Fetches a single order by id.
    pub async fn fetch_order(&self, order_id: &OrderId) -> Result<Order, OrderFlowError> {
        self.db
            .fetch_order_by_id(order_id)
            .await?
            .ok_or_else(|| OrderFlowError::OrderNotFound(order_id.clone()))
    }

    /// Deletes an order record. There is no business rule attached; deleting an absent id succeeds quietly.
    pub async fn delete_order(&self, order_id: &OrderId) -> Result<(), OrderFlowError> {
        self.db.delete_order(order_id).await?;
        debug!("🛒️🗑️ Order {order_id} deleted (if it existed)");
        Ok(())
    }

    pub fn db(&self) -> &B {
        &self.db
    }
}
