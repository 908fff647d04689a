//! Currency codes offered by the calculator.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts live in `rust_decimal::Decimal`; this module only names the
//! currency an amount is denominated in.

use serde::{Deserialize, Serialize};

/// Currency options supported by the calculator.
///
/// Four ISO 4217 codes plus `Other`, which stands for any currency whose cash
/// rounding denomination is supplied by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Australian Dollar
    #[default]
    Aud,
    /// US Dollar
    Usd,
    /// Pound Sterling
    Gbp,
    /// Euro
    Eur,
    /// Any other currency, rounded to a custom cash denomination.
    #[serde(rename = "Other", alias = "OTHER")]
    Other,
}

impl Currency {
    /// All options in picker order.
    pub const ALL: [Self; 5] = [Self::Aud, Self::Usd, Self::Gbp, Self::Eur, Self::Other];

    /// Returns the ISO 4217 code, or `"Other"` for a custom currency.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Aud => "AUD",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Eur => "EUR",
            Self::Other => "Other",
        }
    }

    /// Returns true for the user-defined `Other` option.
    #[must_use]
    pub const fn is_other(self) -> bool {
        matches!(self, Self::Other)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AUD" => Ok(Self::Aud),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "EUR" => Ok(Self::Eur),
            "OTHER" => Ok(Self::Other),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
