//! Cart Summary

use std::io;

use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::{format_amount, line_total},
};

/// Errors that can occur while writing a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Writing to the output failed.
    #[error("failed to write cart summary")]
    Io(#[from] io::Error),
}

/// Write the cart as a table followed by its total.
///
/// # Errors
///
/// Returns a [`SummaryError`] if the output cannot be written.
pub fn write_cart(
    mut out: impl io::Write,
    cart: &Cart,
    currency: &'static Currency,
) -> Result<(), SummaryError> {
    if cart.is_empty() {
        writeln!(out, "Cart is empty")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Code", "Product", "Price", "Quantity", "Line Total"]);

    for item in &cart.items {
        builder.push_record([
            item.product_code.clone(),
            item.product_name.clone(),
            format_amount(item.price, currency),
            item.quantity.to_string(),
            format_amount(line_total(item), currency),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "Total: {}", format_amount(cart.total_amount, currency))?;

    Ok(())
}
