//! # Order flow orchestration
//!
//! [`OrderFlowApi`] composes an [`OrderStore`](crate::traits::OrderStore) and a
//! [`PaymentProcessor`](crate::traits::PaymentProcessor) into the two use cases of the service: creating an order and
//! confirming it. It carries no persistence or transport detail of its own.
pub mod api;
pub mod errors;

pub use api::OrderFlowApi;
pub use errors::OrderFlowError;
