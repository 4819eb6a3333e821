//! Orders

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartItem};

/// Customer placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Full name
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Contact phone number
    pub phone: String,
}

/// Address an order is delivered to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    /// First address line
    pub address_line1: String,

    /// Second address line
    #[serde(default)]
    pub address_line2: String,

    /// City
    pub city: String,

    /// State or region
    pub state: String,

    /// Postal code
    pub zip_code: String,

    /// Country
    pub country: String,
}

/// Customer and delivery details entered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    /// Customer details
    pub customer: Customer,

    /// Delivery address
    pub delivery_address: DeliveryAddress,
}

impl OrderForm {
    /// Combine the form with the current cart lines into an order request.
    pub fn into_request(self, cart: &Cart) -> CreateOrderRequest {
        CreateOrderRequest {
            customer: self.customer,
            delivery_address: self.delivery_address,
            items: cart.items.clone(),
        }
    }
}

/// Reasons an order request is rejected before submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderValidationError {
    /// The cart has no items.
    #[error("items cannot be empty")]
    NoItems,

    /// A required customer field is blank.
    #[error("customer {0} cannot be blank")]
    BlankField(&'static str),

    /// The email address is not plausible.
    #[error("supplied email is not valid")]
    InvalidEmail,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Customer details
    pub customer: Customer,

    /// Delivery address
    pub delivery_address: DeliveryAddress,

    /// Cart lines being ordered
    pub items: Vec<CartItem>,
}

impl CreateOrderRequest {
    /// Check the request against the rules the server enforces.
    ///
    /// # Errors
    ///
    /// Returns the first [`OrderValidationError`] found.
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        if self.items.is_empty() {
            return Err(OrderValidationError::NoItems);
        }

        let customer = &self.customer;

        for (field, value) in [
            ("name", &customer.name),
            ("email", &customer.email),
            ("phone", &customer.phone),
        ] {
            if value.trim().is_empty() {
                return Err(OrderValidationError::BlankField(field));
            }
        }

        let valid_email = customer
            .email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());

        if !valid_email {
            return Err(OrderValidationError::InvalidEmail);
        }

        Ok(())
    }
}

/// Response of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Server-issued order identifier
    pub order_id: u64,

    /// Customer the order was placed for
    #[serde(default)]
    pub customer_id: Option<u64>,

    /// Initial order status
    #[serde(default)]
    pub status: Option<String>,
}

impl OrderConfirmation {
    /// Location of the order confirmation view.
    pub fn confirmation_path(&self) -> String {
        format!("/orders/{}", self.order_id)
    }
}

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product code
    pub product_code: String,

    /// Units ordered
    pub quantity: u32,

    /// Unit price at the time of ordering
    #[serde(default)]
    pub product_price: Option<Decimal>,
}

/// Order details, as returned by `GET /api/orders/{orderNumber}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier
    pub order_id: u64,

    /// Customer identifier
    #[serde(default)]
    pub customer_id: Option<u64>,

    /// Current status
    #[serde(default)]
    pub status: Option<String>,

    /// Channel the order was placed through
    #[serde(default)]
    pub source: Option<String>,

    /// Delivery address
    #[serde(default)]
    pub delivery_address: Option<DeliveryAddress>,

    /// Creation time, in the server's local time
    #[serde(default)]
    pub created_date: Option<DateTime>,

    /// Order total
    #[serde(default)]
    pub total_price: Option<Decimal>,

    /// Ordered lines
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Customer details
    #[serde(default)]
    pub customer: Option<Customer>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cart::CartProduct;

    use super::*;

    fn form() -> OrderForm {
        OrderForm {
            customer: Customer {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "0123456789".to_string(),
            },
            delivery_address: DeliveryAddress {
                address_line1: "12 Analytical Row".to_string(),
                address_line2: String::new(),
                city: "London".to_string(),
                state: "LDN".to_string(),
                zip_code: "N1 9GU".to_string(),
                country: "United Kingdom".to_string(),
            },
        }
    }

    fn cart() -> Cart {
        let mut cart = Cart::empty();

        cart.add_product(&CartProduct {
            product_code: "P100".to_string(),
            product_name: "Kettle".to_string(),
            price: Decimal::new(3_499, 2),
        });

        cart
    }

    #[test]
    fn into_request_copies_cart_items() -> TestResult {
        let request = form().into_request(&cart());

        assert_eq!(request.items.len(), 1);
        assert_eq!(request.validate(), Ok(()));

        let json = serde_json::to_value(&request)?;

        assert_eq!(json["customer"]["email"], "ada@example.com");
        assert_eq!(json["deliveryAddress"]["addressLine1"], "12 Analytical Row");
        assert_eq!(json["deliveryAddress"]["zipCode"], "N1 9GU");
        assert_eq!(json["items"][0]["productCode"], "P100");
        assert_eq!(json["items"][0]["quantity"], 1);

        Ok(())
    }

    #[test]
    fn validate_rejects_empty_cart() {
        let request = form().into_request(&Cart::empty());

        assert_eq!(request.validate(), Err(OrderValidationError::NoItems));
    }

    #[test]
    fn validate_rejects_blank_customer_fields() {
        let mut form = form();
        form.customer.phone = "  ".to_string();

        assert_eq!(
            form.into_request(&cart()).validate(),
            Err(OrderValidationError::BlankField("phone"))
        );
    }

    #[test]
    fn validate_rejects_invalid_email() {
        let mut form = form();
        form.customer.email = "ada.example.com".to_string();

        assert_eq!(
            form.into_request(&cart()).validate(),
            Err(OrderValidationError::InvalidEmail)
        );
    }

    #[test]
    fn confirmation_path_uses_order_id() -> TestResult {
        let confirmation: OrderConfirmation =
            serde_json::from_str(r#"{"orderId":123,"customerId":1,"status":"NEW"}"#)?;

        assert_eq!(confirmation.confirmation_path(), "/orders/123");
        assert_eq!(confirmation.status.as_deref(), Some("NEW"));

        Ok(())
    }

    #[test]
    fn deserializes_order_details() -> TestResult {
        let order: Order = serde_json::from_str(
            r#"{
                "orderId": 42,
                "customerId": 1,
                "status": "NEW",
                "source": "ORDERS",
                "deliveryAddress": {
                    "addressLine1": "12 Analytical Row",
                    "addressLine2": "",
                    "city": "London",
                    "state": "LDN",
                    "zipCode": "N1 9GU",
                    "country": "United Kingdom"
                },
                "createdDate": "2024-05-01T10:15:30",
                "totalPrice": 69.98,
                "items": [{"productCode": "P100", "quantity": 2, "productPrice": 34.99}]
            }"#,
        )?;

        assert_eq!(order.order_id, 42);
        assert_eq!(order.total_price, Some(Decimal::new(6_998, 2)));
        assert_eq!(
            order.created_date,
            Some(jiff::civil::date(2024, 5, 1).at(10, 15, 30, 0))
        );
        assert_eq!(order.items.len(), 1);
        assert!(order.customer.is_none());

        Ok(())
    }
}
