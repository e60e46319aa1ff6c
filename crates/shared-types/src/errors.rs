//! # Error Types
//!
//! Errors produced while parsing or combining shared value types.

use thiserror::Error;

/// Errors from `Amount` parsing and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The decimal text is not a valid amount.
    #[error("Invalid amount literal: {0:?}")]
    InvalidLiteral(String),

    /// More fractional digits than the fixed-point scale supports.
    #[error("Too many fractional digits: at most {max} allowed")]
    TooPrecise { max: u32 },

    /// The value does not fit in 64-bit minor units.
    #[error("Amount out of range")]
    Overflow,
}
