//! Money splitting service.
//!
//! This module provides the main service interface for tip calculations:
//! rounding, tip and total, the naive per-person split, and the exact list of
//! shares that sums to the total.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tipsplit_shared::Currency;
use tracing::trace;

use super::allocation::{allocate_units, count_by_value};
use super::denomination;
use super::error::{SplitError, SplitResult};
use super::rounding::{self, ensure_denomination, gross_amount, to_units};

/// Money splitting service.
///
/// Rounding is always applied to the grand total; the tip is back-computed as
/// `total - price` so it absorbs the rounding error.
pub struct MoneySplitter;

impl MoneySplitter {
    /// Round an amount to the nearest multiple of `denomination`.
    ///
    /// Ties round away from zero.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidDenomination` if `denomination <= 0`.
    pub fn round_money(amount: Decimal, denomination: Decimal) -> SplitResult<Decimal> {
        rounding::round_money(amount, denomination)
    }

    /// Tip actually paid once the total is rounded.
    ///
    /// This is `compute_total(..) - price`, not `round(price * tip_rate)`.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidDenomination` if `denomination <= 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tipsplit_core::split::MoneySplitter;
    ///
    /// // 9.99 + 15% = 11.4885, cash-rounded to 11.50
    /// let tip = MoneySplitter::compute_tip(dec!(9.99), dec!(0.15), dec!(0.05)).unwrap();
    /// assert_eq!(tip, dec!(1.51));
    /// ```
    pub fn compute_tip(
        price: Decimal,
        tip_rate: Decimal,
        denomination: Decimal,
    ) -> SplitResult<Decimal> {
        let total = Self::compute_total(price, tip_rate, denomination)?;
        total.checked_sub(price).ok_or(SplitError::Overflow)
    }

    /// Grand total `price + price * tip_rate`, rounded to `denomination`.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidDenomination` if `denomination <= 0`.
    pub fn compute_total(
        price: Decimal,
        tip_rate: Decimal,
        denomination: Decimal,
    ) -> SplitResult<Decimal> {
        ensure_denomination(denomination)?;
        rounding::round_money(gross_amount(price, tip_rate)?, denomination)
    }

    /// Approximate amount per person, rounded independently of the total.
    ///
    /// For display only: `split * group_size` may differ from the total.
    /// Use [`MoneySplitter::compute_shares`] for amounts that add up.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidGroupSize` if `group_size < 1` and
    /// `SplitError::InvalidDenomination` if `denomination <= 0`.
    pub fn compute_split(
        price: Decimal,
        tip_rate: Decimal,
        group_size: usize,
        denomination: Decimal,
    ) -> SplitResult<Decimal> {
        if group_size < 1 {
            return Err(SplitError::InvalidGroupSize(group_size));
        }
        ensure_denomination(denomination)?;
        let per_person = gross_amount(price, tip_rate)?
            .checked_div(Decimal::from(group_size))
            .ok_or(SplitError::Overflow)?;
        rounding::round_money(per_person, denomination)
    }

    /// Exact shares of the rounded total, one per person.
    ///
    /// Every share is a multiple of `denomination`, the shares sum exactly to
    /// [`MoneySplitter::compute_total`], and no two differ by more than one
    /// denomination. People owing the extra unit come first.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidGroupSize` if `group_size < 1` and
    /// `SplitError::InvalidDenomination` if `denomination <= 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tipsplit_core::split::MoneySplitter;
    ///
    /// let shares = MoneySplitter::compute_shares(dec!(100), dec!(0.10), 3, dec!(0.01)).unwrap();
    /// assert_eq!(shares, vec![dec!(36.67), dec!(36.67), dec!(36.66)]);
    /// ```
    pub fn compute_shares(
        price: Decimal,
        tip_rate: Decimal,
        group_size: usize,
        denomination: Decimal,
    ) -> SplitResult<Vec<Decimal>> {
        if group_size < 1 {
            return Err(SplitError::InvalidGroupSize(group_size));
        }
        ensure_denomination(denomination)?;
        let total_units = to_units(gross_amount(price, tip_rate)?, denomination)?;
        trace!(
            total_units = %total_units,
            denomination = %denomination,
            group_size,
            "Distributing total across group"
        );
        allocate_units(total_units, denomination, group_size)
    }

    /// Denomination for the selected payment method and currency.
    ///
    /// See [`denomination::select_denomination`].
    #[must_use]
    pub fn select_denomination(
        use_cash: bool,
        currency: Currency,
        custom_denomination: Decimal,
    ) -> Decimal {
        denomination::select_denomination(use_cash, currency, custom_denomination)
    }

    /// Groups shares by amount, e.g. `{12.33: 2, 12.34: 1}`.
    #[must_use]
    pub fn group_shares_by_value(shares: &[Decimal]) -> BTreeMap<Decimal, usize> {
        count_by_value(shares)
    }
}
