//! Calculator input and output snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tipsplit_shared::{CalculatorConfig, Currency};

use super::denomination::MINOR_UNIT;

/// Everything the calculator needs for one computation.
///
/// A UI shell keeps one of these as its state and re-runs the calculator
/// whenever a field changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipInputs {
    /// Bill amount before tip.
    pub price: Decimal,
    /// Tip as a fraction of the price (0.15 = 15%).
    pub tip_rate: Decimal,
    /// Whether the total is split across a group.
    pub split: bool,
    /// Number of people sharing the bill when `split` is on.
    pub group_size: usize,
    /// Whether amounts are rounded for cash payment.
    pub use_cash: bool,
    /// Selected currency.
    pub currency: Currency,
    /// Cash denomination for the `Other` currency.
    pub custom_denomination: Decimal,
}

impl Default for TipInputs {
    fn default() -> Self {
        Self {
            price: Decimal::ZERO,
            tip_rate: Decimal::new(10, 2),
            split: false,
            group_size: 2,
            use_cash: false,
            currency: Currency::Aud,
            custom_denomination: MINOR_UNIT,
        }
    }
}

impl TipInputs {
    /// Seeds an input snapshot from configured defaults, with no price entered.
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            price: Decimal::ZERO,
            tip_rate: config.tip_rate,
            split: false,
            group_size: config.group_size,
            use_cash: config.use_cash,
            currency: config.currency,
            custom_denomination: config.custom_denomination,
        }
    }

    /// Returns a copy with the price replaced.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Returns a copy with group splitting enabled for `group_size` people.
    #[must_use]
    pub fn split_between(mut self, group_size: usize) -> Self {
        self.split = true;
        self.group_size = group_size;
        self
    }

    /// Returns a copy rounded for cash in `currency`.
    #[must_use]
    pub fn paying_cash(mut self, currency: Currency) -> Self {
        self.use_cash = true;
        self.currency = currency;
        self
    }

    /// Returns a copy using the configured preset tip at `index`, or `None`
    /// when there is no such preset.
    #[must_use]
    pub fn with_tip_preset(&self, config: &CalculatorConfig, index: usize) -> Option<Self> {
        config.tip_presets.get(index).map(|rate| Self {
            tip_rate: *rate,
            ..self.clone()
        })
    }
}

/// One row of the grouped share summary, e.g. "12.33 x2".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCount {
    /// Share amount.
    pub amount: Decimal,
    /// Number of people paying this amount.
    pub count: usize,
}

/// Every figure the calculator displays for one input snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipBreakdown {
    /// Currency the amounts are in.
    pub currency: Currency,
    /// Denomination every amount was rounded to.
    pub denomination: Decimal,
    /// Tip, back-computed as `total - price`.
    pub tip: Decimal,
    /// Rounded grand total.
    pub total: Decimal,
    /// Approximate per-person amount; `None` when not splitting.
    pub per_person: Option<Decimal>,
    /// Exact shares summing to `total`, extra units first.
    pub shares: Vec<Decimal>,
    /// Distinct share amounts with how many people pay each, ascending.
    pub share_counts: Vec<ShareCount>,
    /// Whether the amounts are cash-rounded.
    pub cash: bool,
}

impl TipBreakdown {
    /// Returns true when every person pays the same amount.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.share_counts.len() <= 1
    }
}
