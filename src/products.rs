//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product as listed by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server identifier
    #[serde(default)]
    pub id: Option<u64>,

    /// Product code
    pub product_code: String,

    /// Product name
    #[serde(default)]
    pub product_name: String,

    /// Product description
    #[serde(default)]
    pub description: Option<String>,

    /// Image location
    #[serde(default)]
    pub image_url: Option<String>,

    /// Unit price
    #[serde(default, serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,

    /// Whether the product can currently be ordered
    #[serde(default)]
    pub in_stock: bool,
}

/// Payload for `POST /api/products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Product code
    pub product_code: String,

    /// Product name
    pub product_name: String,

    /// Product description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Image location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Unit price
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cart::CartProduct;

    use super::*;

    #[test]
    fn deserializes_catalog_product() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 7,
                "productCode": "P100",
                "productName": "Kettle",
                "description": "Stainless steel",
                "imageUrl": null,
                "price": 34.99,
                "inStock": true
            }"#,
        )?;

        assert_eq!(product.id, Some(7));
        assert_eq!(product.price, Decimal::new(3_499, 2));
        assert!(product.image_url.is_none());
        assert!(product.in_stock);

        Ok(())
    }

    #[test]
    fn missing_fields_default() -> TestResult {
        let product: Product = serde_json::from_str(r#"{"productCode":"P100"}"#)?;

        assert_eq!(product.price, Decimal::ZERO);
        assert!(!product.in_stock);

        Ok(())
    }

    #[test]
    fn converts_into_cart_product() {
        let product = Product {
            id: Some(1),
            product_code: "P100".to_string(),
            product_name: "Kettle".to_string(),
            description: None,
            image_url: None,
            price: Decimal::new(3_499, 2),
            in_stock: true,
        };

        let cart_product = CartProduct::from(&product);

        assert_eq!(cart_product.product_code, "P100");
        assert_eq!(cart_product.product_name, "Kettle");
        assert_eq!(cart_product.price, product.price);
    }

    #[test]
    fn new_product_omits_missing_optionals() -> TestResult {
        let json = serde_json::to_value(NewProduct {
            product_code: "P200".to_string(),
            product_name: "Toaster".to_string(),
            description: None,
            image_url: None,
            price: Decimal::new(2_500, 2),
        })?;

        assert_eq!(
            json,
            serde_json::json!({"productCode": "P200", "productName": "Toaster", "price": 25.0})
        );

        Ok(())
    }
}
