//! Shared types, errors, and configuration for Tipsplit.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes offered by the calculator
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CalculatorConfig};
pub use error::{AppError, AppResult};
pub use types::Currency;
