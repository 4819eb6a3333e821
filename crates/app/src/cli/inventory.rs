use clap::{Args, Subcommand};
use storefront_app::{
    config::StorefrontConfig, context::AppContext, inventory, pager::InventoryBrowser,
};

use super::render;

#[derive(Debug, Args)]
pub(crate) struct InventoryCommand {
    #[command(subcommand)]
    command: InventorySubcommand,
}

#[derive(Debug, Subcommand)]
enum InventorySubcommand {
    /// List one page of inventory records
    List(ListInventoryArgs),

    /// Set the available quantity of a product
    Update(UpdateInventoryArgs),
}

#[derive(Debug, Args)]
struct ListInventoryArgs {
    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    page: u32,
}

#[derive(Debug, Args)]
struct UpdateInventoryArgs {
    /// Product code
    code: String,

    /// New available quantity
    quantity: u32,

    /// Zero-based inventory page the product is listed on
    #[arg(long, default_value_t = 0)]
    page: u32,
}

pub(crate) async fn run(
    command: InventoryCommand,
    config: &StorefrontConfig,
) -> Result<(), String> {
    match command.command {
        InventorySubcommand::List(args) => list(args, config).await,
        InventorySubcommand::Update(args) => update(args, config).await,
    }
}

async fn browse(
    config: &StorefrontConfig,
    page: u32,
    mutating: bool,
) -> Result<(AppContext, InventoryBrowser), String> {
    let context = AppContext::from_config(&config.client, mutating)
        .await
        .map_err(|error| format!("failed to initialise client: {error}"))?;

    let mut browser = InventoryBrowser::new(context.inventory.clone());

    browser
        .load(page)
        .await
        .map_err(|error| format!("failed to load inventory: {error}"))?;

    Ok((context, browser))
}

async fn list(args: ListInventoryArgs, config: &StorefrontConfig) -> Result<(), String> {
    let (_, browser) = browse(config, args.page, false).await?;

    println!("{}", render::inventory(browser.page()));

    Ok(())
}

async fn update(args: UpdateInventoryArgs, config: &StorefrontConfig) -> Result<(), String> {
    let (context, browser) = browse(config, args.page, true).await?;

    let record = browser
        .record(&args.code)
        .cloned()
        .ok_or_else(|| {
            format!(
                "product {} not found on inventory page {}",
                args.code, args.page
            )
        })?;

    let outcome = inventory::update_inventory(
        context.inventory.as_ref(),
        record.with_available_quantity(args.quantity),
    )
    .await;

    if !outcome.is_success() {
        return Err(outcome.message().to_string());
    }

    println!("{}", outcome.message());

    Ok(())
}
