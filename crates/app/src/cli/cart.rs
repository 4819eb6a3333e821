use std::io;

use clap::{Args, Subcommand};
use storefront::prelude::write_cart;
use storefront_app::{config::StorefrontConfig, context::AppContext, pager::ProductCatalog};

use super::cart_store;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart
    Show,

    /// Add one unit of a catalog product
    Add(AddArgs),

    /// Set the quantity of a cart line; zero or less removes it
    Update(UpdateArgs),

    /// Remove a cart line
    Remove(RemoveArgs),

    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Product code
    code: String,

    /// Zero-based catalog page the product is listed on
    #[arg(long, default_value_t = 0)]
    page: u32,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Product code
    code: String,

    /// New quantity
    #[arg(allow_negative_numbers = true)]
    quantity: i64,
}

#[derive(Debug, Args)]
struct RemoveArgs {
    /// Product code
    code: String,
}

pub(crate) async fn run(command: CartCommand, config: &StorefrontConfig) -> Result<(), String> {
    let (store, badge) = cart_store(&config.cart);

    match command.command {
        CartSubcommand::Show => {}
        CartSubcommand::Add(args) => {
            let context = AppContext::from_config(&config.client, false)
                .await
                .map_err(|error| format!("failed to initialise client: {error}"))?;

            let mut catalog = ProductCatalog::new(context.catalog);

            catalog
                .load(args.page)
                .await
                .map_err(|error| format!("failed to load products: {error}"))?;

            catalog
                .add_to_cart(&store, &args.code)
                .map_err(|error| format!("failed to update cart: {error}"))?
                .ok_or_else(|| format!("product {} not found on page {}", args.code, args.page))?;
        }
        CartSubcommand::Update(args) => {
            store
                .update_product_quantity(&args.code, args.quantity)
                .map_err(|error| format!("failed to update cart: {error}"))?;
        }
        CartSubcommand::Remove(args) => {
            store
                .update_product_quantity(&args.code, 0)
                .map_err(|error| format!("failed to update cart: {error}"))?;
        }
        CartSubcommand::Clear => {
            store
                .delete_cart()
                .map_err(|error| format!("failed to clear cart: {error}"))?;
        }
    }

    write_cart(io::stdout().lock(), &store.get_cart(), config.cart.currency)
        .map_err(|error| error.to_string())?;

    println!("Cart {}", badge.label());

    Ok(())
}
