//! Adapters for the external collaborators of the server.
pub mod payments;

pub use payments::{MockPaymentGateway, PaymentClient, RemotePaymentClient};
