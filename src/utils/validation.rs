//! Input validation at the edge of the core
//!
//! Every check here runs before any derived value is written, so a
//! rejected input can never leave a partially computed line or total
//! behind.

use bigdecimal::BigDecimal;

use crate::types::{KhataError, KhataResult};

/// Validate that a value is zero or positive
pub fn ensure_non_negative(field: &str, value: &BigDecimal) -> KhataResult<()> {
    if *value < BigDecimal::from(0) {
        Err(KhataError::InvalidLineInput(format!(
            "{} must not be negative, got {}",
            field, value
        )))
    } else {
        Ok(())
    }
}

/// Validate that a percentage lies in 0-100.
///
/// Out-of-range values are rejected rather than clamped so data-entry
/// mistakes surface instead of being silently absorbed.
pub fn ensure_percent(field: &str, value: &BigDecimal) -> KhataResult<()> {
    if *value < BigDecimal::from(0) || *value > BigDecimal::from(100) {
        Err(KhataError::InvalidLineInput(format!(
            "{} must be between 0 and 100, got {}",
            field, value
        )))
    } else {
        Ok(())
    }
}

/// Convert a host-supplied `f64` into an exact decimal.
///
/// NaN and infinities are contract violations on the host side and are
/// rejected here rather than coerced to zero.
pub fn decimal_from_f64(field: &str, value: f64) -> KhataResult<BigDecimal> {
    BigDecimal::try_from(value)
        .map_err(|_| KhataError::NonFiniteResult(format!("{} is not a finite number", field)))
}
