//! Prices

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

use crate::cart::CartItem;

/// Number of decimal places cart totals are rounded to.
pub const TOTAL_DECIMAL_PLACES: u32 = 2;

/// Price of a single cart line (`price * quantity`), unrounded.
pub fn line_total(item: &CartItem) -> Decimal {
    item.price * Decimal::from(item.quantity)
}

/// Calculates the total amount of a list of cart items.
///
/// The sum of every line total is rounded to two decimal places, with midpoints rounded
/// away from zero.
pub fn total_amount(items: &[CartItem]) -> Decimal {
    round_amount(items.iter().map(line_total).sum())
}

/// Round an amount to the precision used for cart totals.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(TOTAL_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount in the given currency, e.g. `$20.00`.
pub fn format_amount(amount: Decimal, currency: &'static Currency) -> String {
    Money::from_decimal(amount, currency).to_string()
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    fn item(code: &str, price: Decimal, quantity: u32) -> CartItem {
        CartItem {
            product_code: code.to_string(),
            product_name: format!("Product {code}"),
            price,
            quantity,
        }
    }

    #[test]
    fn test_line_total() {
        let item = item("P100", Decimal::new(1_050, 2), 3);

        assert_eq!(line_total(&item), Decimal::new(3_150, 2));
    }

    #[test]
    fn test_total_amount() {
        let items = [
            item("P100", Decimal::new(1_000, 2), 2),
            item("P101", Decimal::new(2_499, 2), 1),
        ];

        assert_eq!(total_amount(&items), Decimal::new(4_499, 2));
    }

    #[test]
    fn test_total_amount_empty() {
        assert_eq!(total_amount(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_total_amount_rounds_midpoint_away_from_zero() {
        let items = [item("P100", Decimal::new(1_005, 3), 1)];

        assert_eq!(total_amount(&items), Decimal::new(101, 2));
    }

    #[test]
    fn test_total_amount_rounds_after_summing() {
        let items = [
            item("P100", Decimal::new(3_333, 3), 3),
            item("P101", Decimal::new(1, 3), 4),
        ];

        // 9.999 + 0.004 = 10.003
        assert_eq!(total_amount(&items), Decimal::new(1_000, 2));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::new(2_000, 2), iso::USD), "$20.00");
    }
}
