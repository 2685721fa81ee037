//! # NEN-EN 1993-5:2008 Formulas
//!
//! Clauses from Eurocode 3: Design of steel structures - Part 5: Piling.

use serde::Serialize;

use crate::codes::Standard;
use crate::errors::CalcResult;
use crate::formula::{impl_formula_value, Formula};
use crate::latex::LatexFormula;
use crate::units::{Dimensionless, KnM, Mm3, Mpa, N_TO_KN};
use crate::validations::raise_if_less_or_equal_to_zero;

/// [M_c,Rd] Design moment resistance of a class 1 or 2 cross-section
/// [kNm/m].
///
/// NEN-EN 1993-5:2008 art.5.2.2(2) - Formula (5.2)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DesignMomentResistance {
    /// [β_b] Reduction factor for the bending resistance [-]
    pub beta_b: Dimensionless,
    /// [W_pl] Plastic section modulus [mm³/m]
    pub w_pl: Mm3,
    /// [f_y] Yield strength [MPa]
    pub f_y: Mpa,
    /// [γ_M0] Partial factor for material properties [-]
    pub gamma_m_0: Dimensionless,
    value: KnM,
}

impl DesignMomentResistance {
    pub fn new(
        beta_b: Dimensionless,
        w_pl: Mm3,
        f_y: Mpa,
        gamma_m_0: Dimensionless,
    ) -> CalcResult<Self> {
        let value = Self::evaluate(beta_b, w_pl, f_y, gamma_m_0)?;
        Ok(Self {
            beta_b,
            w_pl,
            f_y,
            gamma_m_0,
            value,
        })
    }

    fn evaluate(
        beta_b: Dimensionless,
        w_pl: Mm3,
        f_y: Mpa,
        gamma_m_0: Dimensionless,
    ) -> CalcResult<KnM> {
        raise_if_less_or_equal_to_zero(&[
            ("beta_b", beta_b),
            ("w_pl", w_pl),
            ("f_y", f_y),
            ("gamma_m_0", gamma_m_0),
        ])?;
        Ok((beta_b * w_pl * f_y / gamma_m_0) * N_TO_KN)
    }

    pub fn latex(&self) -> LatexFormula {
        LatexFormula::new(r"M_{c,Rd}", format!("{}", self.value))
            .with_equation(r"\beta_B W_{pl} f_y / \gamma_{M0}")
            .with_numeric_equation(format!(
                r"{} \cdot {} \cdot {} / {} / 1000",
                self.beta_b, self.w_pl, self.f_y, self.gamma_m_0
            ))
    }
}

impl Formula for DesignMomentResistance {
    const LABEL: &'static str = "5.2";
    const SOURCE: Standard = Standard::NenEn1993_5_2008;

    fn value(&self) -> f64 {
        self.value
    }
}

impl_formula_value!(DesignMomentResistance);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluation() {
        let form = DesignMomentResistance::new(0.5, 20.0, 200.0, 0.8).unwrap();
        assert_relative_eq!(form.value(), 2.5, max_relative = 1e-9);
    }

    #[test]
    fn test_raise_error_when_zero_or_negative_input_is_given() {
        let cases: [(f64, f64, f64, f64); 8] = [
            (-0.5, 1.0, 1.0, 1.0),
            (0.0, 1.0, 1.0, 1.0),
            (1.0, -0.5, 1.0, 1.0),
            (1.0, 0.0, 1.0, 1.0),
            (1.0, 1.0, -0.5, 1.0),
            (1.0, 1.0, 0.0, 1.0),
            (1.0, 1.0, 1.0, -0.5),
            (1.0, 1.0, 1.0, 0.0),
        ];
        for (beta_b, w_pl, f_y, gamma_m_0) in cases {
            let err = DesignMomentResistance::new(beta_b, w_pl, f_y, gamma_m_0).unwrap_err();
            assert!(
                matches!(err, CalcError::LessOrEqualToZero { .. }),
                "inputs ({beta_b}, {w_pl}, {f_y}, {gamma_m_0}) produced {err:?}"
            );
        }
    }

    #[test]
    fn test_latex() {
        let form = DesignMomentResistance::new(0.5, 20.0, 200.0, 0.8).unwrap();
        assert_eq!(
            form.latex().complete(),
            r"M_{c,Rd} = \beta_B W_{pl} f_y / \gamma_{M0} = 0.5 \cdot 20 \cdot 200 / 0.8 / 1000 = 2.5"
        );
        assert_eq!(form.latex().short(), r"M_{c,Rd} = 2.5");
        assert_eq!(form.latex().to_string(), form.latex().complete());
    }

    #[test]
    fn test_rendered_result_round_trips() {
        let form = DesignMomentResistance::new(1.0, 1.245e6, 355.0, 1.0).unwrap();
        let rendered: f64 = form.latex().result.parse().unwrap();
        // Plain Display formatting is lossless for f64.
        assert_eq!(rendered, form.value());
    }
}
