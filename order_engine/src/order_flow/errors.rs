use thiserror::Error;

use crate::{
    db_types::{InvalidStateTransition, OrderId},
    traits::OrderStoreError,
};

#[derive(Debug, Clone, Error)]
pub enum OrderFlowError {
    #[error("Order store error: {0}")]
    StoreError(#[from] OrderStoreError),
    #[error("The requested order {0} does not exist")]
    OrderNotFound(OrderId),
    #[error("Payment for order {0} was declined")]
    PaymentDeclined(OrderId),
    #[error("{0}")]
    InvalidStateTransition(#[from] InvalidStateTransition),
}
