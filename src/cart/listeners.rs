//! Cart Listeners

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::atomic::{AtomicUsize, Ordering},
};

use slotmap::{SlotMap, new_key_type};

use crate::cart::Cart;

new_key_type! {
    /// Handle returned by [`CartStore::subscribe`](crate::cart::CartStore::subscribe).
    pub struct SubscriptionKey;
}

/// Observer notified with the new cart after every cart mutation.
///
/// Listeners run synchronously on the thread performing the mutation, before the mutating
/// call returns.
pub trait CartListener: Send + Sync {
    /// Called with the cart as it was persisted.
    fn cart_updated(&self, cart: &Cart);
}

impl<F> CartListener for F
where
    F: Fn(&Cart) + Send + Sync,
{
    fn cart_updated(&self, cart: &Cart) {
        self(cart);
    }
}

/// Registered cart listeners.
#[derive(Default)]
pub(crate) struct Listeners {
    listeners: SlotMap<SubscriptionKey, Box<dyn CartListener>>,
}

impl Listeners {
    pub(crate) fn insert(&mut self, listener: Box<dyn CartListener>) -> SubscriptionKey {
        self.listeners.insert(listener)
    }

    pub(crate) fn remove(&mut self, key: SubscriptionKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn notify(&self, cart: &Cart) {
        for listener in self.listeners.values() {
            listener.cart_updated(cart);
        }
    }
}

impl Debug for Listeners {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

/// Cart item count badge.
///
/// Tracks the number of distinct lines in the cart, as shown next to the cart link.
#[derive(Debug, Default)]
pub struct CartBadge {
    count: AtomicUsize,
}

impl CartBadge {
    /// Create a badge showing the given count.
    pub fn new(count: usize) -> Self {
        Self {
            count: AtomicUsize::new(count),
        }
    }

    /// Current item count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Badge text, e.g. `(3)`.
    pub fn label(&self) -> String {
        format!("({})", self.count())
    }
}

impl CartListener for CartBadge {
    fn cart_updated(&self, cart: &Cart) {
        self.count.store(cart.len(), Ordering::Relaxed);
    }
}
