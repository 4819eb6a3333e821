//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        CART_STORAGE_KEY, Cart, CartBadge, CartItem, CartListener, CartProduct, CartStore,
        CartStoreError, SubscriptionKey,
    },
    inventory::{InventoryRecord, InventoryUpdateOutcome},
    orders::{
        CreateOrderRequest, Customer, DeliveryAddress, Order, OrderConfirmation, OrderForm,
        OrderItem, OrderValidationError,
    },
    pagination::Page,
    pricing::{format_amount, total_amount},
    products::{NewProduct, Product},
    storage::{FileStorage, MemoryStorage, Storage, StorageError},
    summary::{SummaryError, write_cart},
};

#[cfg(target_arch = "wasm32")]
pub use crate::storage::BrowserStorage;
