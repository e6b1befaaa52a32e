use mockall::mock;
use opg_common::Money;
use order_engine::{
    db_types::{Order, OrderId},
    traits::{OrderStore, OrderStoreError, PaymentProcessor},
};

mock! {
    pub OrderDb {}

    impl Clone for OrderDb {
        fn clone(&self) -> Self;
    }

    impl OrderStore for OrderDb {
        fn url(&self) -> &str;
        async fn upsert_order(&self, order: Order) -> Result<Order, OrderStoreError>;
        async fn fetch_order_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError>;
        async fn delete_order(&self, order_id: &OrderId) -> Result<(), OrderStoreError>;
    }
}

mock! {
    pub Payments {}

    impl Clone for Payments {
        fn clone(&self) -> Self;
    }

    impl PaymentProcessor for Payments {
        async fn authorize(&self, order_id: &OrderId, amount: Money) -> bool;
    }
}
