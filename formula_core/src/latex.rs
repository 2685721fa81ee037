//! # Derivation Rendering
//!
//! [`LatexFormula`] is the value object a formula hands back from its
//! `latex()` method: the pieces of a formatted derivation, assembled into
//! a full or minimal textual view. It holds preformatted strings only —
//! no physics, no validation — and construction cannot fail.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One rendered derivation: symbol, symbolic equation, substituted
/// equation and result, joined by a comparison operator.
///
/// The equation fields are optional; empty fields are omitted from the
/// [`complete`](LatexFormula::complete) view rather than rendered as
/// empty segments.
///
/// ## Example
///
/// ```rust
/// use formula_core::latex::LatexFormula;
///
/// let latex = LatexFormula::new("e_i", "0.0075")
///     .with_equation(r"\theta_i \cdot l_0 / 2")
///     .with_numeric_equation(r"0.003 \cdot 5.000 / 2");
///
/// assert_eq!(latex.complete(), r"e_i = \theta_i \cdot l_0 / 2 = 0.003 \cdot 5.000 / 2 = 0.0075");
/// assert_eq!(latex.short(), "e_i = 0.0075");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatexFormula {
    /// Symbol of the quantity the formula returns, e.g. `f_{ck,c}`
    pub return_symbol: String,
    /// Preformatted result text
    pub result: String,
    /// Symbolic equation in standard notation
    pub equation: String,
    /// The same equation with the numbers substituted
    pub numeric_equation: String,
    /// Label joining the segments; `=` unless the clause is an inequality
    pub comparison_operator_label: String,
}

impl LatexFormula {
    /// Create a rendering with the two required fields; the equation
    /// fields start empty and the operator label defaults to `=`.
    pub fn new(return_symbol: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            return_symbol: return_symbol.into(),
            result: result.into(),
            equation: String::new(),
            numeric_equation: String::new(),
            comparison_operator_label: "=".to_owned(),
        }
    }

    /// Set the symbolic equation
    pub fn with_equation(mut self, equation: impl Into<String>) -> Self {
        self.equation = equation.into();
        self
    }

    /// Set the substituted (numeric) equation
    pub fn with_numeric_equation(mut self, numeric_equation: impl Into<String>) -> Self {
        self.numeric_equation = numeric_equation.into();
        self
    }

    /// Replace the `=` label, e.g. with `\leq` for an inequality clause
    pub fn with_comparison_operator(mut self, label: impl Into<String>) -> Self {
        self.comparison_operator_label = label.into();
        self
    }

    /// Complete representation: symbol, equation, numeric equation and
    /// result, with empty fields filtered out before joining.
    pub fn complete(&self) -> String {
        let segments = [
            &self.return_symbol,
            &self.equation,
            &self.numeric_equation,
            &self.result,
        ];
        let separator = format!(" {} ", self.comparison_operator_label);
        segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.as_str())
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Minimal representation: `symbol = result`, regardless of whether
    /// the equation fields were supplied.
    pub fn short(&self) -> String {
        format!(
            "{} {} {}",
            self.return_symbol, self.comparison_operator_label, self.result
        )
    }
}

impl fmt::Display for LatexFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.complete())
    }
}

/// Render `\frac{numerator}{denominator}`.
pub fn fraction(numerator: impl fmt::Display, denominator: impl fmt::Display) -> String {
    format!(r"\frac{{{numerator}}}{{{denominator}}}")
}

/// Render `\max \left\{arg_1; arg_2; ...\right\}`.
pub fn max_curly_brackets(args: &[&dyn fmt::Display]) -> String {
    let arguments: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    format!(r"\max \left\{{{}\right\}}", arguments.join("; "))
}
