//! Cart Storage Config

use std::path::PathBuf;

use clap::Args;
use rusty_money::iso::{self, Currency};
use storefront::cart::CART_STORAGE_KEY;

/// Cart storage settings.
#[derive(Debug, Args)]
pub struct CartConfig {
    /// Directory the cart state is stored in
    #[arg(long, env = "STOREFRONT_CART_DIR", default_value = ".storefront", global = true)]
    pub cart_dir: PathBuf,

    /// Storage key of the cart state
    #[arg(long, env = "STOREFRONT_CART_KEY", default_value = CART_STORAGE_KEY, global = true)]
    pub cart_key: String,

    /// ISO 4217 currency prices are shown in
    #[arg(
        long,
        env = "STOREFRONT_CURRENCY",
        default_value = "USD",
        value_parser = parse_currency,
        global = true
    )]
    pub currency: &'static Currency,
}

fn parse_currency(code: &str) -> Result<&'static Currency, String> {
    iso::find(&code.to_ascii_uppercase()).ok_or_else(|| format!("unknown currency: {code}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_currency_codes_case_insensitively() {
        assert_eq!(parse_currency("eur").map(|currency| currency.iso_alpha_code), Ok("EUR"));
        assert!(parse_currency("XYZ").is_err());
    }
}
