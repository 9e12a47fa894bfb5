//! Money arithmetic and display formatting.
//!
//! Prices travel as `rust_decimal::Decimal` so cart and order totals never
//! accumulate binary floating-point drift. Display formatting always shows
//! exactly two fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal amount as a dollar string with two fractional digits.
///
/// Midpoints round away from zero, matching how receipts are printed.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(2048, 2); // 20.48
/// assert_eq!(breadbox_core::format_usd(amount), "$20.48");
/// ```
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// Exact extended price for a line item: `quantity * unit_price`.
#[must_use]
pub fn line_total(quantity: i64, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity) * unit_price
}
