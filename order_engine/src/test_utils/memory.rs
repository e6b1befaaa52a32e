use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use opg_common::Money;

use crate::{
    db_types::{Order, OrderId},
    traits::{OrderStore, OrderStoreError, PaymentProcessor},
};

/// A `HashMap`-backed [`OrderStore`] that also counts writes, so tests can assert on side effects.
#[derive(Clone, Default)]
pub struct MemoryStore {
    orders: Arc<Mutex<HashMap<OrderId, Order>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of upserts performed against this store.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// A snapshot of the stored record for `order_id`, bypassing the trait.
    pub fn stored(&self, order_id: &OrderId) -> Option<Order> {
        self.orders.lock().unwrap().get(order_id).cloned()
    }
}

impl OrderStore for MemoryStore {
    fn url(&self) -> &str {
        "memory://orders"
    }

    async fn upsert_order(&self, order: Order) -> Result<Order, OrderStoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.orders.lock().unwrap().insert(order.order_id.clone(), order.clone());
        Ok(order)
    }

    async fn fetch_order_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError> {
        Ok(self.orders.lock().unwrap().get(order_id).cloned())
    }

    async fn delete_order(&self, order_id: &OrderId) -> Result<(), OrderStoreError> {
        self.orders.lock().unwrap().remove(order_id);
        Ok(())
    }
}

/// A [`PaymentProcessor`] that always answers with a scripted verdict and counts how often it was asked.
#[derive(Clone)]
pub struct TestPaymentProcessor {
    approve: bool,
    calls: Arc<AtomicUsize>,
}

impl TestPaymentProcessor {
    pub fn new(approve: bool) -> Self {
        Self { approve, calls: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PaymentProcessor for TestPaymentProcessor {
    async fn authorize(&self, _order_id: &OrderId, _amount: Money) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.approve
    }
}
