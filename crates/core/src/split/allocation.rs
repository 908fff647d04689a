//! Fair distribution of a rounded total across a group.
//!
//! The total is expressed as a whole number of denomination units and split
//! with integer arithmetic:
//! 1. Every person gets `floor(units / group_size)` units
//! 2. The remainder (`0 <= extra < group_size`) is computed by exact subtraction
//! 3. The first `extra` people each get one more unit
//!
//! The shares therefore sum exactly to the total and no two differ by more
//! than one unit.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::error::{SplitError, SplitResult};
use super::rounding::from_units;

/// Splits `total_units` denomination units across `group_size` people.
///
/// Returns the amounts in payment order: the people paying the extra unit
/// come first.
pub(crate) fn allocate_units(
    total_units: i128,
    denomination: Decimal,
    group_size: usize,
) -> SplitResult<Vec<Decimal>> {
    if group_size < 1 {
        return Err(SplitError::InvalidGroupSize(group_size));
    }
    let count = i128::try_from(group_size).map_err(|_| SplitError::Overflow)?;

    // div_euclid floors for a positive divisor, so negative totals work too
    let base_units = total_units.div_euclid(count);
    let extra_count = total_units - base_units * count;
    let extra_count = usize::try_from(extra_count).map_err(|_| SplitError::Overflow)?;

    let base = from_units(base_units, denomination)?;
    let with_extra = from_units(base_units + 1, denomination)?;

    Ok((0..group_size)
        .map(|i| if i < extra_count { with_extra } else { base })
        .collect())
}

/// Counts how many people pay each distinct share amount.
pub(crate) fn count_by_value(shares: &[Decimal]) -> BTreeMap<Decimal, usize> {
    let mut counts = BTreeMap::new();
    for share in shares {
        *counts.entry(*share).or_insert(0) += 1;
    }
    counts
}
