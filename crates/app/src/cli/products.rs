use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use storefront::prelude::{NewProduct, format_amount};
use storefront_app::{
    catalog::CatalogService, config::StorefrontConfig, context::AppContext, pager::ProductCatalog,
};

use super::render;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List one page of the catalog
    List(ListProductsArgs),

    /// Add a product to the catalog
    Create(CreateProductArgs),
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    page: u32,

    /// Show the last page instead
    #[arg(long, conflicts_with = "page")]
    last: bool,
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    /// Product code
    #[arg(long)]
    code: String,

    /// Product name
    #[arg(long)]
    name: String,

    /// Unit price, e.g. 34.99
    #[arg(long)]
    price: Decimal,

    /// Product description
    #[arg(long)]
    description: Option<String>,

    /// Image location
    #[arg(long)]
    image_url: Option<String>,
}

pub(crate) async fn run(command: ProductsCommand, config: &StorefrontConfig) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list(args, config).await,
        ProductsSubcommand::Create(args) => create(args, config).await,
    }
}

async fn list(args: ListProductsArgs, config: &StorefrontConfig) -> Result<(), String> {
    let context = AppContext::from_config(&config.client, false)
        .await
        .map_err(|error| format!("failed to initialise client: {error}"))?;

    let mut catalog = ProductCatalog::new(context.catalog);

    catalog
        .load(args.page)
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    if args.last {
        catalog
            .last_page()
            .await
            .map_err(|error| format!("failed to load products: {error}"))?;
    }

    println!("{}", render::products(catalog.page(), config.cart.currency));

    Ok(())
}

async fn create(args: CreateProductArgs, config: &StorefrontConfig) -> Result<(), String> {
    if args.price.is_sign_negative() {
        return Err("price cannot be negative".to_string());
    }

    let context = AppContext::from_config(&config.client, true)
        .await
        .map_err(|error| format!("failed to initialise client: {error}"))?;

    let product = context
        .catalog
        .create_product(NewProduct {
            product_code: args.code,
            product_name: args.name,
            description: args.description,
            image_url: args.image_url,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_code: {}", product.product_code);
    println!("product_name: {}", product.product_name);
    println!("price: {}", format_amount(product.price, config.cart.currency));

    Ok(())
}
