//! Cash rounding denomination lookup.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tipsplit_shared::Currency;

/// Smallest currency unit for every supported currency (one cent).
pub const MINOR_UNIT: Decimal = dec!(0.01);

/// Australian cash rounding unit (five cents).
pub const AUD_CASH_UNIT: Decimal = dec!(0.05);

/// Picks the denomination amounts are rounded to.
///
/// | `use_cash` | currency | denomination |
/// |---|---|---|
/// | false | any | 0.01 |
/// | true | AUD | 0.05 |
/// | true | Other | `custom_denomination` |
/// | true | USD, GBP, EUR | 0.01 |
///
/// The custom value is returned as given; it is validated when used to round.
#[must_use]
pub fn select_denomination(
    use_cash: bool,
    currency: Currency,
    custom_denomination: Decimal,
) -> Decimal {
    if !use_cash {
        return MINOR_UNIT;
    }
    match currency {
        Currency::Aud => AUD_CASH_UNIT,
        Currency::Other => custom_denomination,
        Currency::Usd | Currency::Gbp | Currency::Eur => MINOR_UNIT,
    }
}
