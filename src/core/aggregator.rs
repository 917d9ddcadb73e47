//! Aggregate totals and currency formatting
//!
//! Totals are summed as `Decimal`, so there is no rounding drift no matter how
//! many records are added. Formatting follows the Indonesian locale (`id-ID`):
//! `.` groups thousands, `,` separates the fraction and at most three
//! fraction digits are shown, with ties rounded away from zero.

use crate::types::TransactionRecord;
use num_format::{Locale, ToFormattedString};
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix for formatted amounts
pub const CURRENCY_PREFIX: &str = "Rp";

/// Locale supplying grouping, decimal and minus symbols
const LOCALE: Locale = Locale::id;

/// Fraction digits kept when formatting
const MAX_FRACTION_DIGITS: u32 = 3;

/// Sum the `total` field of every record; an empty input yields zero
pub fn total<'a, I>(records: I) -> Decimal
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    records.into_iter().map(|record| record.total).sum()
}

/// Format an amount as rupiah, e.g. `Rp 650.000` or `Rp 1.234,5`
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let magnitude = rounded.abs();

    let mut formatted = format!("{} ", CURRENCY_PREFIX);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        formatted.push_str(LOCALE.minus_sign());
    }

    // `trunc` yields scale 0, so the mantissa is the integer part itself
    formatted.push_str(&magnitude.trunc().mantissa().to_formatted_string(&LOCALE));

    let fraction = magnitude.fract().normalize().to_string();
    if let Some(digits) = fraction.strip_prefix("0.") {
        formatted.push_str(LOCALE.decimal());
        formatted.push_str(digits);
    }
    formatted
}
