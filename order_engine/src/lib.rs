//! Order Payment Gateway engine
//!
//! This library contains the core logic for the order management service. It is delivery-agnostic: the REST server
//! lives in a separate crate and only talks to the types exposed here.
//!
//! The library is divided into three main sections:
//! 1. The domain types ([`mod@db_types`]). These carry the order lifecycle itself: an order is `Pending` when it is
//!    created, and the only legal transition is to `Confirmed` via [`db_types::Order::confirm`].
//! 2. The boundary traits ([`mod@traits`]). Persistence ([`OrderStore`]) and payment authorization
//!    ([`PaymentProcessor`]) are capabilities the engine consumes; concrete backends implement these traits.
//! 3. The order flow API ([`OrderFlowApi`]). This is the public-facing orchestration of the create and confirm use
//!    cases across a store and a payment processor.
//!
//! A SQLite implementation of [`OrderStore`] is provided behind the (default) `sqlite` feature.
pub mod db_types;
pub mod order_flow;
pub mod traits;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use order_flow::{OrderFlowApi, OrderFlowError};
pub use traits::{OrderStore, OrderStoreError, PaymentProcessor};
