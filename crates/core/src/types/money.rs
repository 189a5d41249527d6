//! Money formatting for display.
//!
//! Prices travel as `rust_decimal::Decimal` end to end so that sums are
//! exact; formatting for the page is the only place rounding happens.

use rust_decimal::Decimal;

/// Format a decimal amount as a USD price string, e.g. `$19.99`.
///
/// The backend quotes all prices in USD; there is no currency field on the
/// wire.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}
