//! Monetary rounding
//!
//! Amounts are rounded to cents with midpoints going away from zero
//! (commercial rounding): 12.345 becomes 12.35, 12.344 becomes 12.34.
//! Arithmetic happens on exact decimals, so binary float artefacts never
//! decide which side of a midpoint a value falls on.

use courier_common::MONEY_SCALE;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to [`MONEY_SCALE`] decimal places, half away from zero
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
