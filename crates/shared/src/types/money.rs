//! Amount parsing and formatting with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Ledger amounts are read into `rust_decimal::Decimal` and only turned
//! back into text at the output boundary.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits printed for every monetary value.
pub const AMOUNT_SCALE: u32 = 2;

/// Parses a ledger amount field.
///
/// Surrounding whitespace is ignored. Plain (`"12.50"`) and scientific
/// (`"1.25e1"`) notation are accepted. Anything else, including an empty
/// field, yields zero. This never fails.
#[must_use]
pub fn parse_amount(raw: &str) -> Decimal {
    let raw = raw.trim();
    if raw.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .unwrap_or(Decimal::ZERO)
}

/// Formats an amount with exactly two fractional digits.
///
/// Midpoints round away from zero. A value that rounds to zero prints as
/// `0.00`, never `-0.00`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{rounded:.2}")
}
