//! # NEN 9997-1+C2:2017 Formulas
//!
//! Clauses from the Dutch national standard for geotechnical design of
//! structures.

use serde::Serialize;

use crate::codes::Standard;
use crate::errors::CalcResult;
use crate::formula::{impl_formula_value, Formula};
use crate::units::M;
use crate::validations::raise_if_less_or_equal_to_zero;

/// [D_eq] Equivalent width of the pile point centerline for a
/// rectangular pile [m].
///
/// NEN 9997-1+C2:2017 art.1.5.2.106a - Formula (1.0.1)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EquivalentPilePointWidth {
    /// [a] Smallest side of the rectangular pile point [m]
    pub a: M,
    /// [b] Largest side of the rectangular pile point [m]
    pub b: M,
    value: M,
}

impl EquivalentPilePointWidth {
    pub fn new(a: M, b: M) -> CalcResult<Self> {
        let value = Self::evaluate(a, b)?;
        Ok(Self { a, b, value })
    }

    // The equivalence holds for b up to 1.5 a; larger aspect ratios are
    // capped at that bound.
    fn evaluate(a: M, b: M) -> CalcResult<M> {
        raise_if_less_or_equal_to_zero(&[("a", a), ("b", b)])?;
        Ok(1.13 * a * (b / a).min(1.5).sqrt())
    }
}

impl Formula for EquivalentPilePointWidth {
    const LABEL: &'static str = "1.0.1";
    const SOURCE: Standard = Standard::Nen9997_1C2_2017;

    fn value(&self) -> f64 {
        self.value
    }
}

impl_formula_value!(EquivalentPilePointWidth);
