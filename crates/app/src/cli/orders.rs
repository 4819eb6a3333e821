use clap::{Args, Subcommand};
use storefront::prelude::{Customer, DeliveryAddress, OrderForm};
use storefront_app::{
    checkout::Checkout, config::StorefrontConfig, context::AppContext, orders::OrdersService,
};

use super::{cart_store, render};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// Place an order for the cart
    Checkout(CheckoutArgs),

    /// Show one order
    Show(ShowOrderArgs),

    /// List placed orders
    List,
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    /// Customer name
    #[arg(long)]
    name: String,

    /// Customer email
    #[arg(long)]
    email: String,

    /// Customer phone
    #[arg(long)]
    phone: String,

    /// First address line
    #[arg(long)]
    address_line1: String,

    /// Second address line
    #[arg(long, default_value = "")]
    address_line2: String,

    /// City
    #[arg(long)]
    city: String,

    /// State or region
    #[arg(long)]
    state: String,

    /// Postal code
    #[arg(long)]
    zip_code: String,

    /// Country
    #[arg(long)]
    country: String,
}

#[derive(Debug, Args)]
struct ShowOrderArgs {
    /// Order number
    order_number: String,
}

impl From<CheckoutArgs> for OrderForm {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            customer: Customer {
                name: args.name,
                email: args.email,
                phone: args.phone,
            },
            delivery_address: DeliveryAddress {
                address_line1: args.address_line1,
                address_line2: args.address_line2,
                city: args.city,
                state: args.state,
                zip_code: args.zip_code,
                country: args.country,
            },
        }
    }
}

pub(crate) async fn run(command: OrdersCommand, config: &StorefrontConfig) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::Checkout(args) => checkout(args, config).await,
        OrdersSubcommand::Show(args) => show(args, config).await,
        OrdersSubcommand::List => list(config).await,
    }
}

async fn checkout(args: CheckoutArgs, config: &StorefrontConfig) -> Result<(), String> {
    let context = AppContext::from_config(&config.client, true)
        .await
        .map_err(|error| format!("failed to initialise client: {error}"))?;

    let (store, badge) = cart_store(&config.cart);

    let confirmation = Checkout::new(&store, context.orders.as_ref())
        .place_order(args.into())
        .await
        .map_err(|error| error.user_message())?;

    println!("order_id: {}", confirmation.order_id);
    println!("confirmation: {}", confirmation.confirmation_path());
    println!("Cart {}", badge.label());

    Ok(())
}

async fn show(args: ShowOrderArgs, config: &StorefrontConfig) -> Result<(), String> {
    let context = AppContext::from_config(&config.client, false)
        .await
        .map_err(|error| format!("failed to initialise client: {error}"))?;

    let order = context
        .orders
        .get_order(args.order_number)
        .await
        .map_err(|error| format!("failed to load order: {error}"))?;

    println!("{}", render::order(&order, config.cart.currency));

    Ok(())
}

async fn list(config: &StorefrontConfig) -> Result<(), String> {
    let context = AppContext::from_config(&config.client, false)
        .await
        .map_err(|error| format!("failed to initialise client: {error}"))?;

    let orders = context
        .orders
        .list_orders()
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.data.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    println!("{}", render::orders(&orders, config.cart.currency));

    Ok(())
}
