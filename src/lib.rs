//! Storefront
//!
//! Client-side building blocks for a retail storefront: a shopping cart persisted in client
//! storage and broadcast to listeners, and the wire models of the catalog, inventory and
//! order endpoints it talks to.

pub mod cart;
pub mod inventory;
pub mod orders;
pub mod pagination;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod storage;
pub mod summary;
