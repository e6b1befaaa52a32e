use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use order_engine::{sqlite::apply_migrations, OrderFlowApi, SqliteDatabase};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::PaymentClient,
    routes::{health, ConfirmOrderRoute, CreateOrderRoute, DeleteOrderRoute, OrderByIdRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    apply_migrations(db.pool()).await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let payments = PaymentClient::from_config(&config.payments);
    let srv = create_server_instance(config, db, payments)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    payments: PaymentClient,
) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let order_flow = OrderFlowApi::new(db.clone(), payments.clone());
        let api_scope = web::scope("/api/v1")
            .service(CreateOrderRoute::<SqliteDatabase, PaymentClient>::new())
            .service(OrderByIdRoute::<SqliteDatabase, PaymentClient>::new())
            .service(ConfirmOrderRoute::<SqliteDatabase, PaymentClient>::new())
            .service(DeleteOrderRoute::<SqliteDatabase, PaymentClient>::new());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("opg::access_log"))
            .app_data(web::Data::new(order_flow))
            .service(health)
            .service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
