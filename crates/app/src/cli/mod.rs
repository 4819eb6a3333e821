use std::sync::Arc;

use clap::{Parser, Subcommand};
use storefront::prelude::{Cart, CartBadge, CartListener, CartStore, FileStorage};
use storefront_app::{
    config::{CartConfig, StorefrontConfig},
    logging::LoggingConfig,
};

mod cart;
mod inventory;
mod orders;
mod products;
mod render;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Retail storefront client", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: StorefrontConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(products::ProductsCommand),
    Cart(cart::CartCommand),
    Inventory(inventory::InventoryCommand),
    Orders(orders::OrdersCommand),
}

impl Cli {
    /// Parse arguments, falling back to the environment and a `.env` file.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Products(command) => products::run(command, &self.config).await,
            Commands::Cart(command) => cart::run(command, &self.config).await,
            Commands::Inventory(command) => inventory::run(command, &self.config).await,
            Commands::Orders(command) => orders::run(command, &self.config).await,
        }
    }
}

/// Cart store over the configured directory, with a badge following its item count.
fn cart_store(config: &CartConfig) -> (CartStore<FileStorage>, Arc<CartBadge>) {
    let mut store = CartStore::with_key(
        FileStorage::new(config.cart_dir.clone()),
        config.cart_key.clone(),
    );

    let badge = Arc::new(CartBadge::new(store.item_count()));
    let listener = Arc::clone(&badge);

    store.subscribe(move |cart: &Cart| listener.cart_updated(cart));

    (store, badge)
}
