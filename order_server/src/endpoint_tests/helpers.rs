use actix_web::{
    http::StatusCode,
    test::{self, TestRequest},
    web::ServiceConfig,
    App,
};
use serde_json::Value;

pub async fn get_request(path: &str, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    send(TestRequest::get().uri(path), configure).await
}

pub async fn post_request(path: &str, body: Value, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    send(TestRequest::post().uri(path).set_json(body), configure).await
}

pub async fn put_request(path: &str, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    send(TestRequest::put().uri(path), configure).await
}

pub async fn delete_request(path: &str, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    send(TestRequest::delete().uri(path), configure).await
}

async fn send(req: TestRequest, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let app = test::init_service(App::new().configure(configure)).await;
    let res = test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&test::read_body(res).await).into_owned();
    (status, body)
}
