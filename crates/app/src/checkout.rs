//! Checkout
//!
//! Turns the persisted cart and the customer's details into a single order submission.

use std::fmt::{self, Debug, Formatter};

use storefront::{
    cart::CartStore,
    orders::{OrderConfirmation, OrderForm, OrderValidationError},
    storage::Storage,
};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::orders::{OrdersService, OrdersServiceError};

/// Errors raised while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The order request failed local validation and was not sent.
    #[error("invalid order: {0}")]
    Invalid(#[from] OrderValidationError),

    /// The server rejected the order or could not be reached.
    #[error("order submission failed")]
    Submission(#[source] OrdersServiceError),
}

impl CheckoutError {
    /// Message shown to the customer.
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(reason) => format!("Order creation failed: {reason}"),
            Self::Submission(_) => "Order creation failed".to_string(),
        }
    }
}

/// Places orders for the cart held in a [`CartStore`].
pub struct Checkout<'a, S> {
    store: &'a CartStore<S>,
    orders: &'a dyn OrdersService,
}

impl<'a, S: Storage> Checkout<'a, S> {
    pub fn new(store: &'a CartStore<S>, orders: &'a dyn OrdersService) -> Self {
        Self { store, orders }
    }

    /// Submit the current cart once.
    ///
    /// On success the cart is cleared. On failure it is left untouched so the customer can
    /// try again.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if validation or submission fails.
    pub async fn place_order(&self, form: OrderForm) -> Result<OrderConfirmation, CheckoutError> {
        let cart = self.store.get_cart();
        let request = form.into_request(&cart);

        request.validate()?;

        let confirmation = self
            .orders
            .create_order(request)
            .await
            .map_err(|err| {
                error!(error = %err, "failed to create order");

                CheckoutError::Submission(err)
            })?;

        info!(
            order_id = confirmation.order_id,
            items = cart.len(),
            total = %cart.total_amount,
            "order placed"
        );

        // The order exists on the server at this point, so a stale cart is only logged.
        if let Err(err) = self.store.delete_cart() {
            warn!(error = %err, order_id = confirmation.order_id, "failed to clear cart");
        }

        Ok(confirmation)
    }
}

impl<S> Debug for Checkout<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkout").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use rust_decimal::Decimal;
    use storefront::{
        cart::CartProduct,
        orders::{Customer, DeliveryAddress},
        storage::MemoryStorage,
    };
    use testresult::TestResult;

    use crate::{http::HttpError, orders::MockOrdersService};

    use super::*;

    fn form() -> OrderForm {
        OrderForm {
            customer: Customer {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
            },
            delivery_address: DeliveryAddress {
                address_line1: "1 Analytical Way".to_string(),
                address_line2: String::new(),
                city: "London".to_string(),
                state: "LDN".to_string(),
                zip_code: "N1 9GU".to_string(),
                country: "UK".to_string(),
            },
        }
    }

    fn filled_store() -> TestResult<CartStore<MemoryStorage>> {
        let store = CartStore::new(MemoryStorage::new());

        store.add_product_to_cart(&CartProduct {
            product_code: "P100".to_string(),
            product_name: "Kettle".to_string(),
            price: Decimal::new(3_499, 2),
        })?;

        Ok(store)
    }

    #[tokio::test]
    async fn successful_order_clears_cart() -> TestResult {
        let store = filled_store()?;
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .withf(|request| {
                request.items.len() == 1
                    && request.items.first().is_some_and(|item| item.product_code == "P100")
            })
            .once()
            .returning(|_| {
                Ok(OrderConfirmation {
                    order_id: 42,
                    customer_id: Some(7),
                    status: Some("NEW".to_string()),
                })
            });

        let confirmation = Checkout::new(&store, &orders).place_order(form()).await?;

        assert_eq!(confirmation.confirmation_path(), "/orders/42");
        assert!(store.get_cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn failed_order_keeps_cart() -> TestResult {
        let store = filled_store()?;
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().once().returning(|_| {
            Err(OrdersServiceError::from(HttpError::Status {
                status: StatusCode::BAD_REQUEST,
                body: "rejected".to_string(),
            }))
        });

        let err = Checkout::new(&store, &orders)
            .place_order(form())
            .await
            .err()
            .ok_or("expected checkout to fail")?;

        assert_eq!(err.user_message(), "Order creation failed");
        assert_eq!(store.get_cart().len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_is_rejected_before_submission() {
        let store = CartStore::new(MemoryStorage::new());
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().never();

        let result = Checkout::new(&store, &orders).place_order(form()).await;

        assert!(matches!(
            result,
            Err(CheckoutError::Invalid(OrderValidationError::NoItems))
        ));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_submission() -> TestResult {
        let store = filled_store()?;
        let mut orders = MockOrdersService::new();
        let mut form = form();

        form.customer.email = "not-an-email".to_string();
        orders.expect_create_order().never();

        let result = Checkout::new(&store, &orders).place_order(form).await;

        assert!(matches!(
            result,
            Err(CheckoutError::Invalid(OrderValidationError::InvalidEmail))
        ));
        assert_eq!(store.get_cart().len(), 1);

        Ok(())
    }
}
