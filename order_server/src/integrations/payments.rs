//! Payment-service adapters.
//!
//! The wire contract is tiny: POST `{"order_id": ..., "amount": ...}` and read back `{"approved": bool}`.
//! Both adapters honour the fail-closed rule of [`PaymentProcessor`]: any transport error, unexpected status or
//! undecodable body is reported as "not approved", never propagated.
use log::*;
use opg_common::{Money, DEFAULT_CURRENCY_CODE};
use order_engine::{db_types::OrderId, traits::PaymentProcessor};
use serde::{Deserialize, Serialize};

use crate::config::PaymentConfig;

#[derive(Debug, Clone, Serialize)]
struct PaymentRequest<'a> {
    order_id: &'a OrderId,
    amount: Money,
}

#[derive(Debug, Clone, Deserialize)]
struct PaymentResponse {
    approved: bool,
}

//--------------------------------------  RemotePaymentClient  -------------------------------------------------------

/// Talks to the real payment authorization service over HTTP.
#[derive(Clone)]
pub struct RemotePaymentClient {
    client: reqwest::Client,
    url: String,
}

impl RemotePaymentClient {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self { client: reqwest::Client::new(), url: url.into() }
    }
}

impl PaymentProcessor for RemotePaymentClient {
    async fn authorize(&self, order_id: &OrderId, amount: Money) -> bool {
        let request = PaymentRequest { order_id, amount };
        let result = async {
            let response = self.client.post(&self.url).json(&request).send().await?.error_for_status()?;
            response.json::<PaymentResponse>().await
        }
        .await;
        match result {
            Ok(PaymentResponse { approved }) => {
                debug!("💳️ Payment service answered for order {order_id}: approved = {approved}");
                approved
            },
            Err(e) => {
                // Fail closed. Callers cannot tell an outage apart from a decline, and that is the contract.
                warn!("💳️ Payment service call for order {order_id} failed. Treating as declined. {e}");
                false
            },
        }
    }
}

//--------------------------------------   MockPaymentGateway   ------------------------------------------------------

/// Approves every charge. For local development only; enabled with `OPG_USE_MOCK_PAYMENTS`.
#[derive(Clone, Default)]
pub struct MockPaymentGateway;

impl PaymentProcessor for MockPaymentGateway {
    async fn authorize(&self, order_id: &OrderId, amount: Money) -> bool {
        info!("💳️ [MOCK] Approving payment of {DEFAULT_CURRENCY_CODE} {amount} for order {order_id}");
        true
    }
}

//--------------------------------------      PaymentClient      -----------------------------------------------------

/// Runtime selection between the real client and the mock, so the concrete server type does not change with the
/// configuration.
#[derive(Clone)]
pub enum PaymentClient {
    Remote(RemotePaymentClient),
    Mock(MockPaymentGateway),
}

impl PaymentClient {
    pub fn from_config(config: &PaymentConfig) -> Self {
        if config.use_mock {
            Self::Mock(MockPaymentGateway)
        } else {
            Self::Remote(RemotePaymentClient::new(config.url.clone()))
        }
    }
}

impl PaymentProcessor for PaymentClient {
    async fn authorize(&self, order_id: &OrderId, amount: Money) -> bool {
        match self {
            Self::Remote(client) => client.authorize(order_id, amount).await,
            Self::Mock(mock) => mock.authorize(order_id, amount).await,
        }
    }
}
