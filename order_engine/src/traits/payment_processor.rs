use opg_common::Money;

use crate::db_types::OrderId;

/// The payment authorization contract.
///
/// The answer is a plain boolean on purpose. Implementations that talk to a real payment service over the network
/// must map *any* transport or protocol failure to `false` rather than propagate it: a communication failure and a
/// business decline are indistinguishable to the caller. Do not "fix" this by adding an error channel.
#[allow(async_fn_in_trait)]
pub trait PaymentProcessor: Clone {
    /// Synchronously checks whether a charge of `amount` against `order_id` is approved.
    async fn authorize(&self, order_id: &OrderId, amount: Money) -> bool;
}
