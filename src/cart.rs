//! Cart
//!
//! The client-held shopping cart, its line items and the store that persists it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{pricing::total_amount, products::Product};

pub mod listeners;
pub mod store;

pub use listeners::{CartBadge, CartListener, SubscriptionKey};
pub use store::{CART_STORAGE_KEY, CartStore, CartStoreError};

/// A product as it is added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    /// Product code, unique within the cart
    pub product_code: String,

    /// Display name
    pub product_name: String,

    /// Unit price
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        Self {
            product_code: product.product_code.clone(),
            product_name: product.product_name.clone(),
            price: product.price,
        }
    }
}

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product code, unique within the cart
    pub product_code: String,

    /// Display name
    pub product_name: String,

    /// Unit price
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,

    /// Number of units, always at least one
    pub quantity: u32,
}

impl CartItem {
    fn from_product(product: &CartProduct) -> Self {
        Self {
            product_code: product.product_code.clone(),
            product_name: product.product_name.clone(),
            price: product.price,
            quantity: 1,
        }
    }
}

/// Cart
///
/// Items keep insertion order and never share a product code. `total_amount` is the
/// rounded sum of every line and is recomputed by every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart lines in insertion order
    #[serde(default)]
    pub items: Vec<CartItem>,

    /// Rounded sum of `price * quantity` over all lines
    #[serde(default, serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_amount: Decimal,
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty()
    }
}

impl Cart {
    /// An empty cart with a zero total.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_amount: Decimal::ZERO,
        }
    }

    /// Number of distinct product lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the quantities of every line.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Find the line for a product code.
    pub fn item(&self, product_code: &str) -> Option<&CartItem> {
        self.items
            .iter()
            .find(|item| item.product_code == product_code)
    }

    /// Add one unit of a product, appending a new line when the code is not in the cart.
    pub fn add_product(&mut self, product: &CartProduct) {
        match self
            .items
            .iter_mut()
            .find(|item| item.product_code == product.product_code)
        {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem::from_product(product)),
        }

        self.recalculate_total();
    }

    /// Remove the line for a product code. Returns `true` when a line was removed.
    pub fn remove_product(&mut self, product_code: &str) -> bool {
        let before = self.items.len();

        self.items.retain(|item| item.product_code != product_code);
        self.recalculate_total();

        self.items.len() != before
    }

    /// Set the quantity of an existing line. Returns `false` when the code is not in the cart.
    ///
    /// A quantity of zero removes the line.
    pub fn set_quantity(&mut self, product_code: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_product(product_code);
        }

        let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_code == product_code)
        else {
            return false;
        };

        item.quantity = quantity;
        self.recalculate_total();

        true
    }

    /// Recompute `total_amount` from the current lines.
    pub fn recalculate_total(&mut self) {
        self.total_amount = total_amount(&self.items);
    }

    /// Restore the cart invariants on state read back from storage.
    ///
    /// Zero-quantity lines are dropped, lines sharing a product code are merged into the
    /// first occurrence and the total is recomputed.
    pub fn normalize(&mut self) {
        let mut merged: Vec<CartItem> = Vec::with_capacity(self.items.len());

        for item in self.items.drain(..).filter(|item| item.quantity > 0) {
            match merged
                .iter_mut()
                .find(|existing| existing.product_code == item.product_code)
            {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => merged.push(item),
            }
        }

        self.items = merged;
        self.recalculate_total();
    }
}
