//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Handlers which block the current worker thread stop it from processing new requests, so anything long and
//! non-cpu-bound (I/O, database calls, the payment service) must be awaited, never blocked on.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use order_engine::{
    db_types::OrderId,
    traits::{OrderStore, PaymentProcessor},
    OrderFlowApi,
};

use crate::{
    data_objects::{CreateOrderRequest, JsonResponse},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

//----------------------------------------------   Health  ----------------------------------------------------

#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Orders  ----------------------------------------------------

route!(create_order => Post "/orders" impl OrderStore, PaymentProcessor);
/// Route handler for creating a new order.
///
/// The body carries the customer id and the order total; the response is the persisted order, which starts life as
/// `Pending`.
pub async fn create_order<B: OrderStore, P: PaymentProcessor>(
    body: web::Json<CreateOrderRequest>,
    api: web::Data<OrderFlowApi<B, P>>,
) -> Result<HttpResponse, ServerError> {
    let CreateOrderRequest { customer_id, total_price } = body.into_inner();
    debug!("💻️ POST new order for customer {customer_id} ({total_price})");
    let order = api.create_order(customer_id, total_price).await?;
    Ok(HttpResponse::Created().json(order))
}

route!(order_by_id => Get "/orders/{order_id}" impl OrderStore, PaymentProcessor);
pub async fn order_by_id<B: OrderStore, P: PaymentProcessor>(
    path: web::Path<String>,
    api: web::Data<OrderFlowApi<B, P>>,
) -> Result<HttpResponse, ServerError> {
    let order_id = OrderId::from(path.into_inner());
    debug!("💻️ GET order {order_id}");
    let order = api.fetch_order(&order_id).await?;
    Ok(HttpResponse::Ok().json(order))
}

route!(confirm_order => Put "/orders/{order_id}/confirm" impl OrderStore, PaymentProcessor);
/// Route handler for the confirm endpoint.
///
/// Confirmation is gated by the payment service: a decline (or an unreachable payment service, which looks the same)
/// answers 409 and leaves the order untouched. Confirming an order that is not `Pending` also answers 409.
pub async fn confirm_order<B: OrderStore, P: PaymentProcessor>(
    path: web::Path<String>,
    api: web::Data<OrderFlowApi<B, P>>,
) -> Result<HttpResponse, ServerError> {
    let order_id = OrderId::from(path.into_inner());
    debug!("💻️ PUT confirm order {order_id}");
    let order = api.confirm_order(&order_id).await?;
    Ok(HttpResponse::Ok().json(order))
}

route!(delete_order => Delete "/orders/{order_id}" impl OrderStore, PaymentProcessor);
/// Route handler for deleting an order record. Carries no business rule and is idempotent.
pub async fn delete_order<B: OrderStore, P: PaymentProcessor>(
    path: web::Path<String>,
    api: web::Data<OrderFlowApi<B, P>>,
) -> Result<HttpResponse, ServerError> {
    let order_id = OrderId::from(path.into_inner());
    debug!("💻️ DELETE order {order_id}");
    api.delete_order(&order_id).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success(format!("Order {order_id} deleted"))))
}
