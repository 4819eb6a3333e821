//! Cart Store

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::{
        Cart, CartProduct,
        listeners::{CartListener, Listeners, SubscriptionKey},
    },
    storage::{Storage, StorageError},
};

/// Storage key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "RETAILSTORE_STATE";

/// Errors raised while persisting the cart.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// The storage backend failed.
    #[error("failed to persist cart")]
    Storage(#[from] StorageError),

    /// The cart could not be serialized, or the persisted state is not a cart.
    #[error("invalid cart state")]
    Serialize(#[from] serde_json::Error),
}

/// Cart Store
///
/// Reads, mutates and persists the cart held in client storage, notifying subscribed
/// listeners after every mutation. Each operation reads the persisted state afresh, so
/// writes from other stores sharing the same storage are picked up but never merged.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    listeners: Listeners,
}

impl<S: Storage> CartStore<S> {
    /// Create a store persisting under [`CART_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    /// Create a store persisting under a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            listeners: Listeners::default(),
        }
    }

    /// Storage key used by this store.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a listener called with the new cart after every mutation.
    pub fn subscribe(&mut self, listener: impl CartListener + 'static) -> SubscriptionKey {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.listeners.remove(key)
    }

    /// Read the persisted cart.
    ///
    /// When nothing is persisted, an empty cart is stored and returned. Corrupt state is
    /// logged and replaced with an empty cart. A failed read is logged and yields an empty
    /// cart while the stored state is left alone, so this never fails.
    pub fn get_cart(&self) -> Cart {
        match self.load() {
            Ok(Some(cart)) => cart,
            Ok(None) => self.initialize(),
            Err(CartStoreError::Serialize(error)) => {
                warn!(key = %self.key, "discarding corrupt cart state: {error}");

                self.initialize()
            }
            Err(error) => {
                warn!(key = %self.key, "failed to read cart state: {error}");

                Cart::empty()
            }
        }
    }

    /// Number of distinct lines in the persisted cart.
    pub fn item_count(&self) -> usize {
        self.get_cart().len()
    }

    /// Add one unit of `product`, appending a new line when its code is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] if the cart cannot be read or the updated cart cannot be
    /// persisted; listeners are not notified in that case.
    pub fn add_product_to_cart(&self, product: &CartProduct) -> Result<Cart, CartStoreError> {
        let mut cart = self.current()?;

        cart.add_product(product);

        debug!(product_code = %product.product_code, "added product to cart");

        self.commit(cart)
    }

    /// Set the quantity of a cart line.
    ///
    /// A quantity below one removes the line. An unknown product code with a positive
    /// quantity is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] if the cart cannot be read or the updated cart cannot be
    /// persisted; listeners are not notified in that case.
    pub fn update_product_quantity(
        &self,
        product_code: &str,
        quantity: i64,
    ) -> Result<Cart, CartStoreError> {
        let mut cart = self.current()?;

        if quantity < 1 {
            cart.remove_product(product_code);
        } else {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

            if !cart.set_quantity(product_code, quantity) {
                warn!(%product_code, "product code is not in the cart, ignoring quantity update");
            }
        }

        self.commit(cart)
    }

    /// Remove the persisted cart and notify listeners with an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] if the storage entry cannot be removed.
    pub fn delete_cart(&self) -> Result<(), CartStoreError> {
        self.storage.remove_item(&self.key)?;

        debug!(key = %self.key, "deleted cart");

        self.listeners.notify(&Cart::empty());

        Ok(())
    }

    fn load(&self) -> Result<Option<Cart>, CartStoreError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };

        let mut cart: Cart = serde_json::from_str(&raw)?;

        cart.normalize();

        Ok(Some(cart))
    }

    /// Cart a mutation starts from. Storage failures propagate; corrupt state starts over.
    fn current(&self) -> Result<Cart, CartStoreError> {
        match self.load() {
            Ok(cart) => Ok(cart.unwrap_or_else(Cart::empty)),
            Err(CartStoreError::Serialize(error)) => {
                warn!(key = %self.key, "discarding corrupt cart state: {error}");

                Ok(Cart::empty())
            }
            Err(error) => Err(error),
        }
    }

    fn initialize(&self) -> Cart {
        let cart = Cart::empty();

        if let Err(error) = self.persist(&cart) {
            warn!(key = %self.key, "failed to persist empty cart: {error}");
        }

        cart
    }

    fn persist(&self, cart: &Cart) -> Result<(), CartStoreError> {
        let serialized = serde_json::to_string(cart)?;

        self.storage.set_item(&self.key, &serialized)?;

        Ok(())
    }

    fn commit(&self, cart: Cart) -> Result<Cart, CartStoreError> {
        self.persist(&cart)?;

        self.listeners.notify(&cart);

        Ok(cart)
    }
}
