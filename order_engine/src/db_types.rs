use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use log::error;
use opg_common::Money;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;
use uuid::Uuid;

//--------------------------------------        OrderId        -------------------------------------------------------

/// A lightweight wrapper around the string identifier of an order.
///
/// Identifiers are generated once, at order creation, and are never reused or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// Generates a fresh, globally unique order id.
    pub fn random() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//--------------------------------------      OrderStatus      -------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
pub enum OrderStatus {
    /// The order is newly created and the payment has not been authorized yet. This is the initial state.
    Pending,
    /// Payment has been authorized for the order. This is the terminal state.
    Confirmed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Confirmed => write!(f, "Confirmed"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid order status: {0}")]
pub struct ConversionError(String);

impl FromStr for OrderStatus {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Confirmed" => Ok(Self::Confirmed),
            s => Err(ConversionError(s.to_string())),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| {
            error!("Invalid order status: {value}. But this conversion cannot fail. Defaulting to Pending");
            OrderStatus::Pending
        })
    }
}

//-------------------------------------- InvalidStateTransition ------------------------------------------------------

#[derive(Debug, Clone, Error)]
#[error("Order {order_id} cannot be confirmed in status {status}")]
pub struct InvalidStateTransition {
    pub order_id: OrderId,
    pub status: OrderStatus,
}

//--------------------------------------        Order        ---------------------------------------------------------

/// An order record.
///
/// Orders are value objects: the state machine never mutates in place, it returns a fresh `Order` with the new
/// status. The persisted row is keyed on `order_id` and updated via the store's upsert.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    /// The customer this order belongs to, as an opaque identifier supplied by the caller
    pub customer_id: String,
    /// The total price of the order, in fixed-point currency
    pub total_price: Money,
    pub status: OrderStatus,
    /// The time the order was created. Set once, immutable.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds a brand-new `Pending` order with a freshly generated id and the current timestamp.
    pub fn create<S: Into<String>>(customer_id: S, total_price: Money) -> Self {
        Self {
            order_id: OrderId::random(),
            customer_id: customer_id.into(),
            total_price,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// The sole state transition: `Pending -> Confirmed`.
    ///
    /// Returns a new order value with `Confirmed` status and identity, price and timestamp untouched. Any other
    /// starting status fails with [`InvalidStateTransition`] and nothing changes.
    pub fn confirm(self) -> Result<Order, InvalidStateTransition> {
        if !self.is_pending() {
            return Err(InvalidStateTransition { order_id: self.order_id, status: self.status });
        }
        Ok(Order { status: OrderStatus::Confirmed, ..self })
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}
