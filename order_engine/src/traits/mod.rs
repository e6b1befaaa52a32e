//! # Boundary traits
//!
//! This module defines the interface contracts the order engine consumes.
//!
//! * [`OrderStore`] defines the persistence contract: an idempotent upsert keyed on the order id, a lookup, and an
//!   idempotent delete. SQLite is the bundled backend, but anything that can satisfy the contract will do.
//! * [`PaymentProcessor`] defines the payment authorization contract. It is deliberately fail-closed: implementations
//!   must answer "approved" or "not approved", and swallow their own transport failures as "not approved".
mod order_store;
mod payment_processor;

pub use order_store::{OrderStore, OrderStoreError};
pub use payment_processor::PaymentProcessor;
