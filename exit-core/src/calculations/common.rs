//! Pieces shared by both tax engines.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when running the tax engines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// The requested state or province code has no reference table entry.
    /// This indicates a caller bug or stale configuration, not a transient
    /// condition.
    #[error("invalid jurisdiction code: {0}")]
    InvalidJurisdiction(String),
}

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (values at exactly 0.005 round away from zero).
///
/// The engines themselves never round; this is for callers that want a
/// cents-precision figure for display.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
