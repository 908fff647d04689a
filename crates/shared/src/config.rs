//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Calculator defaults and input bounds.
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Calculator configuration.
///
/// Seeds the initial input snapshot and carries the bounds a UI shell offers.
/// The core never clamps against these bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalculatorConfig {
    /// Initial tip rate as a fraction (0.10 = 10%).
    #[serde(default = "default_tip_rate")]
    pub tip_rate: Decimal,
    /// Quick-pick tip rates.
    #[serde(default = "default_tip_presets")]
    pub tip_presets: Vec<Decimal>,
    /// Initial group size when splitting.
    #[serde(default = "default_group_size")]
    pub group_size: usize,
    /// Smallest group size offered.
    #[serde(default = "default_min_group_size")]
    pub min_group_size: usize,
    /// Largest group size offered.
    #[serde(default = "default_max_group_size")]
    pub max_group_size: usize,
    /// Initially selected currency.
    #[serde(default)]
    pub currency: Currency,
    /// Whether cash rounding starts enabled.
    #[serde(default)]
    pub use_cash: bool,
    /// Denomination used when the currency is `Other`.
    #[serde(default = "default_custom_denomination")]
    pub custom_denomination: Decimal,
}

fn default_tip_rate() -> Decimal {
    Decimal::new(10, 2)
}

fn default_tip_presets() -> Vec<Decimal> {
    vec![
        Decimal::new(5, 2),
        Decimal::new(10, 2),
        Decimal::new(15, 2),
        Decimal::new(20, 2),
    ]
}

fn default_group_size() -> usize {
    2
}

fn default_min_group_size() -> usize {
    2
}

fn default_max_group_size() -> usize {
    20 // keeps the per-person share list short
}

fn default_custom_denomination() -> Decimal {
    Decimal::new(1, 2)
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            tip_rate: default_tip_rate(),
            tip_presets: default_tip_presets(),
            group_size: default_group_size(),
            min_group_size: default_min_group_size(),
            max_group_size: default_max_group_size(),
            currency: Currency::default(),
            use_cash: false,
            custom_denomination: default_custom_denomination(),
        }
    }
}

impl CalculatorConfig {
    /// Checks the configured values against the calculator's rules.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        if self.tip_rate < Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "tip_rate must not be negative, got {}",
                self.tip_rate
            )));
        }
        if let Some(preset) = self.tip_presets.iter().find(|p| **p < Decimal::ZERO) {
            return Err(AppError::Validation(format!(
                "tip_presets must not be negative, got {preset}"
            )));
        }
        if self.min_group_size < 1 {
            return Err(AppError::Validation(
                "min_group_size must be at least 1".to_string(),
            ));
        }
        if self.min_group_size > self.max_group_size {
            return Err(AppError::Validation(format!(
                "min_group_size ({}) exceeds max_group_size ({})",
                self.min_group_size, self.max_group_size
            )));
        }
        if !(self.min_group_size..=self.max_group_size).contains(&self.group_size) {
            return Err(AppError::Validation(format!(
                "group_size must be between {} and {}, got {}",
                self.min_group_size, self.max_group_size, self.group_size
            )));
        }
        if self.custom_denomination <= Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "custom_denomination must be positive, got {}",
                self.custom_denomination
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `TIPSPLIT__*` environment variables
    /// (e.g. `TIPSPLIT__CALCULATOR__CURRENCY=USD`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        debug!(run_mode = %run_mode, "Loading calculator configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TIPSPLIT").separator("__"))
            .build()?;

        Self::finish(config)
    }

    /// Builds configuration from an in-memory TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or is invalid.
    pub fn from_toml(source: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Self::finish(config)
    }

    /// Checks every section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for the first invalid value.
    pub fn validate(&self) -> AppResult<()> {
        self.calculator.validate()
    }

    fn finish(config: config::Config) -> AppResult<Self> {
        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }
}
