//! Storefront client services: HTTP access to the catalog, inventory and orders endpoints,
//! paginated browsing and checkout over the persisted cart.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod context;
pub mod csrf;
pub mod http;
pub mod inventory;
pub mod logging;
pub mod orders;
pub mod pager;
