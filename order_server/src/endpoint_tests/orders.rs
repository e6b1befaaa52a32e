use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{TimeZone, Utc};
use opg_common::Money;
use order_engine::{
    db_types::{Order, OrderId, OrderStatus},
    OrderFlowApi,
};
use serde_json::{json, Value};

use super::{
    helpers::{delete_request, get_request, post_request, put_request},
    mocks::{MockOrderDb, MockPayments},
};
use crate::routes::{ConfirmOrderRoute, CreateOrderRoute, DeleteOrderRoute, OrderByIdRoute};

const ORDER_ID: &str = "11e0cfe4a40c4b90b86ff1b3b1a9b0aa";

const PENDING_ORDER_JSON: &str = r#"{"order_id":"11e0cfe4a40c4b90b86ff1b3b1a9b0aa","customer_id":"client-42","total_price":"100.00","status":"Pending","created_at":"2024-02-29T13:30:00Z"}"#;
const CONFIRMED_ORDER_JSON: &str = r#"{"order_id":"11e0cfe4a40c4b90b86ff1b3b1a9b0aa","customer_id":"client-42","total_price":"100.00","status":"Confirmed","created_at":"2024-02-29T13:30:00Z"}"#;

fn pending_order() -> Order {
    Order {
        order_id: OrderId(ORDER_ID.into()),
        customer_id: "client-42".into(),
        total_price: "100.00".parse::<Money>().unwrap(),
        status: OrderStatus::Pending,
        created_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
    }
}

fn register<F: FnOnce() -> (MockOrderDb, MockPayments)>(cfg: &mut ServiceConfig, build: F) {
    let (db, payments) = build();
    cfg.service(CreateOrderRoute::<MockOrderDb, MockPayments>::new())
        .service(OrderByIdRoute::<MockOrderDb, MockPayments>::new())
        .service(ConfirmOrderRoute::<MockOrderDb, MockPayments>::new())
        .service(DeleteOrderRoute::<MockOrderDb, MockPayments>::new())
        .app_data(web::Data::new(OrderFlowApi::new(db, payments)));
}

//----------------------------------------------   Create  ----------------------------------------------------

#[actix_web::test]
async fn create_order_returns_the_persisted_pending_order() {
    let _ = env_logger::try_init().ok();
    let body = json!({"customer_id": "client-42", "total_price": "100.00"});
    let (status, body) = post_request("/orders", body, configure_create).await;
    assert_eq!(status, StatusCode::CREATED);
    let order: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(order["status"], "Pending");
    assert_eq!(order["customer_id"], "client-42");
    assert_eq!(order["total_price"], "100.00");
    assert!(!order["order_id"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn create_order_with_a_bad_total_is_rejected() {
    let _ = env_logger::try_init().ok();
    let body = json!({"customer_id": "client-42", "total_price": "12,50"});
    let (status, _) = post_request("/orders", body, configure_create).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

fn configure_create(cfg: &mut ServiceConfig) {
    register(cfg, || {
        let mut db = MockOrderDb::new();
        db.expect_upsert_order().returning(|order| Ok(order));
        (db, MockPayments::new())
    });
}

//----------------------------------------------   Fetch  ----------------------------------------------------

#[actix_web::test]
async fn fetch_order_by_id() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request(&format!("/orders/{ORDER_ID}"), configure_fetch).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, PENDING_ORDER_JSON);
}

#[actix_web::test]
async fn fetch_missing_order_is_not_found() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/orders/no-such-order", configure_fetch).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("was not found"));
}

fn configure_fetch(cfg: &mut ServiceConfig) {
    register(cfg, || {
        let mut db = MockOrderDb::new();
        db.expect_fetch_order_by_id()
            .returning(|id| Ok((id.as_str() == ORDER_ID).then(pending_order)));
        (db, MockPayments::new())
    });
}

//----------------------------------------------   Confirm  ----------------------------------------------------

#[actix_web::test]
async fn confirm_with_approved_payment() {
    let _ = env_logger::try_init().ok();
    let (status, body) = put_request(&format!("/orders/{ORDER_ID}/confirm"), configure_confirm_approved).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, CONFIRMED_ORDER_JSON);
}

fn configure_confirm_approved(cfg: &mut ServiceConfig) {
    register(cfg, || {
        let mut db = MockOrderDb::new();
        db.expect_fetch_order_by_id().returning(|_| Ok(Some(pending_order())));
        db.expect_upsert_order().times(1).returning(|order| Ok(order));
        let mut payments = MockPayments::new();
        payments.expect_authorize().times(1).returning(|_, _| true);
        (db, payments)
    });
}

#[actix_web::test]
async fn confirm_with_declined_payment_is_a_conflict() {
    let _ = env_logger::try_init().ok();
    let (status, body) = put_request(&format!("/orders/{ORDER_ID}/confirm"), configure_confirm_declined).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("was declined"));
}

fn configure_confirm_declined(cfg: &mut ServiceConfig) {
    register(cfg, || {
        let mut db = MockOrderDb::new();
        db.expect_fetch_order_by_id().returning(|_| Ok(Some(pending_order())));
        // a decline must not write anything
        db.expect_upsert_order().times(0);
        let mut payments = MockPayments::new();
        payments.expect_authorize().times(1).returning(|_, _| false);
        (db, payments)
    });
}

#[actix_web::test]
async fn confirm_missing_order_is_not_found() {
    let _ = env_logger::try_init().ok();
    let (status, body) = put_request(&format!("/orders/{ORDER_ID}/confirm"), configure_confirm_missing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("was not found"));
}

fn configure_confirm_missing(cfg: &mut ServiceConfig) {
    register(cfg, || {
        let mut db = MockOrderDb::new();
        db.expect_fetch_order_by_id().returning(|_| Ok(None));
        db.expect_upsert_order().times(0);
        let mut payments = MockPayments::new();
        // the lookup fails before the payment service is ever consulted
        payments.expect_authorize().times(0);
        (db, payments)
    });
}

#[actix_web::test]
async fn confirming_twice_is_a_conflict() {
    let _ = env_logger::try_init().ok();
    let (status, body) = put_request(&format!("/orders/{ORDER_ID}/confirm"), configure_confirm_confirmed).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("cannot be confirmed in status Confirmed"));
}

fn configure_confirm_confirmed(cfg: &mut ServiceConfig) {
    register(cfg, || {
        let mut db = MockOrderDb::new();
        db.expect_fetch_order_by_id().returning(|_| Ok(Some(pending_order().confirm().unwrap())));
        db.expect_upsert_order().times(0);
        let mut payments = MockPayments::new();
        // the payment check runs before the state check
        payments.expect_authorize().times(1).returning(|_, _| true);
        (db, payments)
    });
}

//----------------------------------------------   Delete  ----------------------------------------------------

#[actix_web::test]
async fn delete_order_succeeds() {
    let _ = env_logger::try_init().ok();
    let (status, body) = delete_request(&format!("/orders/{ORDER_ID}"), configure_delete).await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["success"], true);
}

fn configure_delete(cfg: &mut ServiceConfig) {
    register(cfg, || {
        let mut db = MockOrderDb::new();
        db.expect_delete_order().returning(|_| Ok(()));
        (db, MockPayments::new())
    });
}
