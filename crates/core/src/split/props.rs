//! Property-based tests for rounding and splitting.
//!
//! - Totals are whole multiples of the denomination
//! - The tip is exactly total minus price
//! - Shares sum to the total and differ by at most one unit

use proptest::prelude::*;
use rust_decimal::Decimal;
use tipsplit_shared::Currency;

use super::service::MoneySplitter;

/// Strategy to generate prices (0.00 to 100,000.00).
fn price() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate signed prices (-10,000.00 to 10,000.00).
fn signed_price() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate tip rates in basis points (0% to 100.00%).
fn tip_rate() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|bps| Decimal::new(bps, 4))
}

/// Strategy to generate group sizes (1 to 50).
fn group_size() -> impl Strategy<Value = usize> {
    1usize..=50
}

/// Strategy to generate denominations: the built-in ones plus arbitrary
/// custom values from 0.01 to 10.00.
fn denomination() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::new(1, 2)),
        Just(Decimal::new(5, 2)),
        Just(Decimal::new(10, 2)),
        Just(Decimal::ONE),
        (1i64..=1_000i64).prop_map(|cents| Decimal::new(cents, 2)),
    ]
}

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* valid inputs, the total is a whole multiple of the denomination.
    #[test]
    fn prop_total_is_multiple_of_denomination(
        price in price(),
        tip_rate in tip_rate(),
        denomination in denomination(),
    ) {
        let total = MoneySplitter::compute_total(price, tip_rate, denomination).unwrap();
        prop_assert!(
            (total % denomination).is_zero(),
            "Total {} is not a multiple of {}",
            total, denomination
        );
    }

    /// *For any* valid inputs, tip == total - price exactly.
    #[test]
    fn prop_tip_is_total_minus_price(
        price in signed_price(),
        tip_rate in tip_rate(),
        denomination in denomination(),
    ) {
        let total = MoneySplitter::compute_total(price, tip_rate, denomination).unwrap();
        let tip = MoneySplitter::compute_tip(price, tip_rate, denomination).unwrap();
        prop_assert_eq!(tip, total - price);
    }

    /// *For any* valid inputs, the shares sum exactly to the total.
    #[test]
    fn prop_shares_sum_to_total(
        price in signed_price(),
        tip_rate in tip_rate(),
        group_size in group_size(),
        denomination in denomination(),
    ) {
        let total = MoneySplitter::compute_total(price, tip_rate, denomination).unwrap();
        let shares = MoneySplitter::compute_shares(price, tip_rate, group_size, denomination).unwrap();
        let sum: Decimal = shares.iter().copied().sum();
        prop_assert_eq!(sum, total, "Sum of shares must equal the total");
    }

    /// *For any* valid inputs, there is one share per person and the largest
    /// and smallest differ by zero or one denomination.
    #[test]
    fn prop_shares_are_fair(
        price in price(),
        tip_rate in tip_rate(),
        group_size in group_size(),
        denomination in denomination(),
    ) {
        let shares = MoneySplitter::compute_shares(price, tip_rate, group_size, denomination).unwrap();
        prop_assert_eq!(shares.len(), group_size);

        let max = shares.iter().copied().max().unwrap();
        let min = shares.iter().copied().min().unwrap();
        let spread = max - min;
        prop_assert!(
            spread.is_zero() || spread == denomination,
            "Spread {} exceeds one denomination {}",
            spread, denomination
        );
    }

    /// *For any* valid inputs, every share is a non-negative multiple of the
    /// denomination and larger shares come first.
    #[test]
    fn prop_shares_are_whole_units_in_order(
        price in price(),
        tip_rate in tip_rate(),
        group_size in group_size(),
        denomination in denomination(),
    ) {
        let shares = MoneySplitter::compute_shares(price, tip_rate, group_size, denomination).unwrap();
        for share in &shares {
            prop_assert!(*share >= Decimal::ZERO);
            prop_assert!((*share % denomination).is_zero());
        }
        prop_assert!(shares.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    /// *For any* group size, the naive split is within one denomination of an
    /// exact share.
    #[test]
    fn prop_split_close_to_shares(
        price in price(),
        tip_rate in tip_rate(),
        group_size in group_size(),
        denomination in denomination(),
    ) {
        let split = MoneySplitter::compute_split(price, tip_rate, group_size, denomination).unwrap();
        let shares = MoneySplitter::compute_shares(price, tip_rate, group_size, denomination).unwrap();
        let min = shares.iter().copied().min().unwrap();
        let max = shares.iter().copied().max().unwrap();
        prop_assert!(split >= min - denomination && split <= max + denomination);
    }

    /// *For any* currency, paying by card rounds to the cent.
    #[test]
    fn prop_card_uses_minor_unit(
        currency in currency(),
        custom in denomination(),
    ) {
        prop_assert_eq!(
            MoneySplitter::select_denomination(false, currency, custom),
            Decimal::new(1, 2)
        );
    }

    /// *For any* custom value, AUD cash rounds to five cents.
    #[test]
    fn prop_aud_cash_ignores_custom(custom in denomination()) {
        prop_assert_eq!(
            MoneySplitter::select_denomination(true, Currency::Aud, custom),
            Decimal::new(5, 2)
        );
    }

    /// *For any* shares, the grouped counts add back up to the group size.
    #[test]
    fn prop_grouped_counts_cover_group(
        price in price(),
        tip_rate in tip_rate(),
        group_size in group_size(),
        denomination in denomination(),
    ) {
        let shares = MoneySplitter::compute_shares(price, tip_rate, group_size, denomination).unwrap();
        let counts = MoneySplitter::group_shares_by_value(&shares);
        prop_assert!(counts.len() <= 2);
        prop_assert_eq!(counts.values().sum::<usize>(), group_size);
    }
}
