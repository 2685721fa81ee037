//! # Validation Helpers
//!
//! Guard functions shared across the formula catalog, so each formula's
//! evaluation stays a one-line algebraic expression. Every helper takes
//! named values as `(name, value)` pairs, checks them in order, and
//! reports the first offending pair via the matching [`CalcError`]
//! variant. The helpers are pure: no state, no logging.

use crate::errors::{CalcError, CalcResult};

/// Fail with [`CalcError::NegativeValue`] if any supplied value is
/// strictly less than zero.
pub fn raise_if_negative(values: &[(&str, f64)]) -> CalcResult<()> {
    for (name, value) in values {
        if *value < 0.0 {
            return Err(CalcError::negative_value(*name, *value));
        }
    }
    Ok(())
}

/// Fail with [`CalcError::LessOrEqualToZero`] if any supplied value is
/// less than or equal to zero.
///
/// Used for quantities that appear as divisors or are physically required
/// to be strictly positive: yield strengths, partial factors, section
/// moduli.
pub fn raise_if_less_or_equal_to_zero(values: &[(&str, f64)]) -> CalcResult<()> {
    for (name, value) in values {
        if *value <= 0.0 {
            return Err(CalcError::less_or_equal_to_zero(*name, *value));
        }
    }
    Ok(())
}

/// Fail with [`CalcError::GreaterThan90`] if any supplied angle exceeds
/// 90 degrees.
pub fn raise_if_greater_than_90(values: &[(&str, f64)]) -> CalcResult<()> {
    for (name, value) in values {
        if *value > 90.0 {
            return Err(CalcError::greater_than_90(*name, *value));
        }
    }
    Ok(())
}
