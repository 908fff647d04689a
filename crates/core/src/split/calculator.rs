//! Tip calculator entry point.
//!
//! A UI shell holds a [`TipInputs`] snapshot and calls
//! [`TipCalculator::calculate`] after every change. Nothing is cached: each
//! call is a pure function of its inputs.

use tracing::debug;

use super::error::SplitResult;
use super::service::MoneySplitter;
use super::types::{ShareCount, TipBreakdown, TipInputs};

/// Stateless tip calculator.
pub struct TipCalculator;

impl TipCalculator {
    /// Computes every displayed figure for one input snapshot.
    ///
    /// When splitting is off the bill is treated as a group of one: there is
    /// no per-person amount, a single share equal to the total, and
    /// `group_size` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidGroupSize` when splitting across fewer than
    /// one person and `SplitError::InvalidDenomination` for a non-positive
    /// custom denomination.
    pub fn calculate(inputs: &TipInputs) -> SplitResult<TipBreakdown> {
        let denomination = MoneySplitter::select_denomination(
            inputs.use_cash,
            inputs.currency,
            inputs.custom_denomination,
        );

        let total = MoneySplitter::compute_total(inputs.price, inputs.tip_rate, denomination)?;
        let tip = MoneySplitter::compute_tip(inputs.price, inputs.tip_rate, denomination)?;

        let group_size = if inputs.split { inputs.group_size } else { 1 };
        let per_person = if inputs.split {
            Some(MoneySplitter::compute_split(
                inputs.price,
                inputs.tip_rate,
                group_size,
                denomination,
            )?)
        } else {
            None
        };
        let shares =
            MoneySplitter::compute_shares(inputs.price, inputs.tip_rate, group_size, denomination)?;

        let share_counts = MoneySplitter::group_shares_by_value(&shares)
            .into_iter()
            .map(|(amount, count)| ShareCount { amount, count })
            .collect();

        debug!(
            price = %inputs.price,
            tip_rate = %inputs.tip_rate,
            currency = %inputs.currency,
            cash = inputs.use_cash,
            group_size,
            denomination = %denomination,
            total = %total,
            "Calculated tip breakdown"
        );

        Ok(TipBreakdown {
            currency: inputs.currency,
            denomination,
            tip,
            total,
            per_person,
            shares,
            share_counts,
            cash: inputs.use_cash,
        })
    }
}
