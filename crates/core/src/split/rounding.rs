//! Denomination-aware money rounding.
//!
//! CRITICAL: Rounding strategy:
//! - Amounts are rounded to a whole number of denomination units
//! - Ties round away from zero (0.025 at 0.05 becomes 0.05)
//! - Exact decimal arithmetic only; overflow is an error, never a panic

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::error::{SplitError, SplitResult};

/// Rejects denominations that are zero or negative.
pub(crate) fn ensure_denomination(denomination: Decimal) -> SplitResult<()> {
    if denomination <= Decimal::ZERO {
        return Err(SplitError::InvalidDenomination(denomination));
    }
    Ok(())
}

/// Returns `price + price * tip_rate`, the unrounded amount owed.
pub(crate) fn gross_amount(price: Decimal, tip_rate: Decimal) -> SplitResult<Decimal> {
    price
        .checked_mul(tip_rate)
        .and_then(|tip| price.checked_add(tip))
        .ok_or(SplitError::Overflow)
}

/// Rounds `amount` to the nearest whole count of `denomination` units.
pub(crate) fn to_units(amount: Decimal, denomination: Decimal) -> SplitResult<i128> {
    ensure_denomination(denomination)?;
    amount
        .checked_div(denomination)
        .map(|quotient| quotient.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|units| units.to_i128())
        .ok_or(SplitError::Overflow)
}

/// Converts a count of denomination units back to an amount.
pub(crate) fn from_units(units: i128, denomination: Decimal) -> SplitResult<Decimal> {
    Decimal::from_i128(units)
        .and_then(|units| units.checked_mul(denomination))
        .ok_or(SplitError::Overflow)
}

/// Rounds an amount to the nearest multiple of `denomination`.
///
/// Divides by the denomination, rounds the quotient to an integer with ties
/// away from zero, then multiplies back.
///
/// # Errors
///
/// Returns `SplitError::InvalidDenomination` if `denomination <= 0` and
/// `SplitError::Overflow` if the result is not representable.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tipsplit_core::split::round_money;
///
/// assert_eq!(round_money(dec!(57.52), dec!(0.05)).unwrap(), dec!(57.50));
/// assert_eq!(round_money(dec!(57.53), dec!(0.05)).unwrap(), dec!(57.55));
/// ```
pub fn round_money(amount: Decimal, denomination: Decimal) -> SplitResult<Decimal> {
    let units = to_units(amount, denomination)?;
    from_units(units, denomination)
}
