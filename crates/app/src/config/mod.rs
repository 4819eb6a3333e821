//! Storefront CLI configuration module

use clap::Args;

use crate::logging::LoggingConfig;

pub mod cart;
pub mod client;

pub use cart::CartConfig;
pub use client::ClientConfig;

/// Settings shared by every storefront command.
#[derive(Debug, Args)]
pub struct StorefrontConfig {
    /// Server connection settings.
    #[command(flatten)]
    pub client: ClientConfig,

    /// Cart storage settings.
    #[command(flatten)]
    pub cart: CartConfig,

    /// Diagnostic output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
