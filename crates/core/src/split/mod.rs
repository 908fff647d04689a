//! Tip, total, and fair group split with denomination-aware rounding.

mod allocation;
pub mod calculator;
pub mod denomination;
pub mod error;
pub mod rounding;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use calculator::TipCalculator;
pub use denomination::{AUD_CASH_UNIT, MINOR_UNIT, select_denomination};
pub use error::{SplitError, SplitResult};
pub use rounding::round_money;
pub use service::MoneySplitter;
pub use types::{ShareCount, TipBreakdown, TipInputs};
