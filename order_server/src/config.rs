use std::env;

use log::*;

const DEFAULT_OPG_HOST: &str = "127.0.0.1";
const DEFAULT_OPG_PORT: u16 = 8280;
const DEFAULT_PAYMENT_URL: &str = "http://localhost:8281/payments";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub payments: PaymentConfig,
}

#[derive(Clone, Debug)]
pub struct PaymentConfig {
    /// The POST endpoint of the payment authorization service.
    pub url: String,
    /// When true, payment authorizations are approved locally instead of calling the payment service.
    pub use_mock: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_OPG_HOST.to_string(),
            port: DEFAULT_OPG_PORT,
            database_url: String::default(),
            payments: PaymentConfig::default(),
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self { url: DEFAULT_PAYMENT_URL.to_string(), use_mock: false }
    }
}

impl ServerConfig {
    pub fn from_env_or_default() -> Self {
        let host = env::var("OPG_HOST").unwrap_or_else(|_| DEFAULT_OPG_HOST.to_string());
        let port = env::var("OPG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("{s} is not a valid port for OPG_PORT. {e}. Using the default, {DEFAULT_OPG_PORT}.");
                    DEFAULT_OPG_PORT
                })
            })
            .unwrap_or(DEFAULT_OPG_PORT);
        let database_url = order_engine::sqlite::db_url();
        let payments = PaymentConfig::from_env_or_default();
        Self { host, port, database_url, payments }
    }
}

impl PaymentConfig {
    pub fn from_env_or_default() -> Self {
        let url = env::var("OPG_PAYMENT_URL").unwrap_or_else(|_| {
            info!("OPG_PAYMENT_URL is not set. Using the default.");
            DEFAULT_PAYMENT_URL.to_string()
        });
        let use_mock = env::var("OPG_USE_MOCK_PAYMENTS")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        if use_mock {
            warn!("💳️ Mock payments are enabled. Every confirmation will be approved. Do not use this in production.");
        }
        Self { url, use_mock }
    }
}
