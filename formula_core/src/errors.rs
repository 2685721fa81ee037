//! # Error Types
//!
//! Structured error types for formula validation. Each variant corresponds
//! to one violated precondition and carries the offending parameter name
//! and value, so the message is suitable for direct display in a
//! calculation report.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::errors::{CalcError, CalcResult};
//!
//! fn validate_yield_strength(f_y: f64) -> CalcResult<()> {
//!     if f_y <= 0.0 {
//!         return Err(CalcError::less_or_equal_to_zero("f_y", f_y));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for formula construction and evaluation
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for violated formula preconditions.
///
/// All validation happens at construction time, before any arithmetic;
/// the first violated rule aborts construction and propagates unmodified
/// to the caller. These are invalid-input signals, not transient failures.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A quantity that must be >= 0 was supplied < 0
    #[error("Negative {parameter}: {value}. {parameter} cannot be negative")]
    NegativeValue { parameter: String, value: f64 },

    /// A quantity required to be strictly positive (divisor, strength,
    /// section modulus, partial factor) was supplied <= 0
    #[error("Invalid {parameter}: {value}. {parameter} cannot be zero or negative")]
    LessOrEqualToZero { parameter: String, value: f64 },

    /// An angle exceeded its physically valid range of 90 degrees
    #[error("Invalid {parameter}: {value}. {parameter} cannot be greater than 90 degrees")]
    GreaterThan90 { parameter: String, value: f64 },
}

impl CalcError {
    /// Create a NegativeValue error
    pub fn negative_value(parameter: impl Into<String>, value: f64) -> Self {
        CalcError::NegativeValue {
            parameter: parameter.into(),
            value,
        }
    }

    /// Create a LessOrEqualToZero error
    pub fn less_or_equal_to_zero(parameter: impl Into<String>, value: f64) -> Self {
        CalcError::LessOrEqualToZero {
            parameter: parameter.into(),
            value,
        }
    }

    /// Create a GreaterThan90 error
    pub fn greater_than_90(parameter: impl Into<String>, value: f64) -> Self {
        CalcError::GreaterThan90 {
            parameter: parameter.into(),
            value,
        }
    }

    /// Name of the parameter that violated its precondition
    pub fn parameter(&self) -> &str {
        match self {
            CalcError::NegativeValue { parameter, .. }
            | CalcError::LessOrEqualToZero { parameter, .. }
            | CalcError::GreaterThan90 { parameter, .. } => parameter,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::NegativeValue { .. } => "NEGATIVE_VALUE",
            CalcError::LessOrEqualToZero { .. } => "LESS_OR_EQUAL_TO_ZERO",
            CalcError::GreaterThan90 { .. } => "GREATER_THAN_90",
        }
    }
}
