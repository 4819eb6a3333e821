//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use storefront::{
    orders::{CreateOrderRequest, Order, OrderConfirmation},
    pagination::Page,
};

use crate::{http::StorefrontClient, orders::errors::OrdersServiceError};

const ORDERS_PATH: &str = "/api/orders";

#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    client: StorefrontClient,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<OrderConfirmation, OrdersServiceError> {
        self.client
            .send_json(Method::POST, ORDERS_PATH, &request)
            .await
            .map_err(Into::into)
    }

    async fn get_order(&self, order_number: String) -> Result<Order, OrdersServiceError> {
        self.client
            .get_json(&format!("{ORDERS_PATH}/{order_number}"), &[])
            .await
            .map_err(Into::into)
    }

    async fn list_orders(&self) -> Result<Page<Order>, OrdersServiceError> {
        self.client
            .get_json(ORDERS_PATH, &[])
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Order operations.
pub trait OrdersService: Send + Sync {
    /// Submits an order built from the cart.
    async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<OrderConfirmation, OrdersServiceError>;

    /// Fetches a placed order.
    async fn get_order(&self, order_number: String) -> Result<Order, OrdersServiceError>;

    /// Lists the customer's orders.
    async fn list_orders(&self) -> Result<Page<Order>, OrdersServiceError>;
}
