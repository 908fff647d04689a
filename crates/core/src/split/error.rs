//! Split error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `SplitError`.
pub type SplitResult<T> = Result<T, SplitError>;

/// Errors raised by money rounding and splitting.
///
/// Invalid inputs are rejected before any arithmetic runs; nothing is clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// A split needs at least one person.
    #[error("Group size must be at least 1, got {0}")]
    InvalidGroupSize(usize),

    /// Money can only be rounded to a positive denomination.
    #[error("Denomination must be positive, got {0}")]
    InvalidDenomination(Decimal),

    /// A decimal operation left the representable range.
    #[error("Amount is outside the representable decimal range")]
    Overflow,
}

impl SplitError {
    /// Returns the error code for callers that surface errors to users.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidGroupSize(_) | Self::InvalidDenomination(_) => "INVALID_ARGUMENT",
            Self::Overflow => "ARITHMETIC_OVERFLOW",
        }
    }

    /// Returns true for errors caused by a bad argument rather than by range.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidGroupSize(_) | Self::InvalidDenomination(_)
        )
    }
}
