//! # Order payment gateway server
//! This crate hosts the REST delivery adapter for the order engine. It is responsible for:
//! * Accepting order creation and confirmation requests and handing them to the engine's order flow API.
//! * Talking to the external payment authorization service (or a local mock of it).
//! * Mapping engine errors onto HTTP status codes.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! * `GET /health`: liveness probe.
//! * `POST /api/v1/orders`: create a new order.
//! * `GET /api/v1/orders/{order_id}`: fetch a single order.
//! * `PUT /api/v1/orders/{order_id}/confirm`: confirm an order, gated by payment authorization.
//! * `DELETE /api/v1/orders/{order_id}`: delete an order record.
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod integrations;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
