//! # formula_core - Eurocode Formula Engine
//!
//! `formula_core` encodes individual clauses from structural-engineering
//! codes (Eurocodes and related national annexes) as callable, validated,
//! documented units. Each formula takes the named physical quantities its
//! clause requires, validates their domain constraints at construction
//! time, computes its scalar result once, and can render itself as a
//! human-readable derivation for reporting.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every formula is a one-shot pure computation, frozen
//!   after construction
//! - **Fail at construction**: a violated precondition means no instance
//!   exists - there is no invalid-but-unevaluated state
//! - **Number-like**: an instance compares and computes like its result,
//!   so callers write ordinary arithmetic against it
//! - **Citable**: every formula carries its clause label and source
//!   standard for audit trails
//!
//! ## Quick Start
//!
//! ```rust
//! use formula_core::codes::en_1992_1_1::MaxTransverseLegSpacing;
//! use formula_core::Formula;
//!
//! // Formula 9.8N: maximum transverse spacing of shear-link legs
//! let s_t_max = MaxTransverseLegSpacing::new(500.0).unwrap();
//!
//! assert_eq!(s_t_max, 375.0);
//! assert!(s_t_max < 600.0);
//! assert_eq!(s_t_max.label(), "9.8N");
//! assert_eq!(s_t_max.source().citation(), "NEN-EN 1992-1-1+C2:2011");
//! ```
//!
//! Formulas that support derivation text return a
//! [`LatexFormula`](latex::LatexFormula):
//!
//! ```rust
//! use formula_core::codes::en_1993_5::DesignMomentResistance;
//!
//! let m_c_rd = DesignMomentResistance::new(0.5, 20.0, 200.0, 0.8).unwrap();
//! assert_eq!(
//!     m_c_rd.latex().complete(),
//!     r"M_{c,Rd} = \beta_B W_{pl} f_y / \gamma_{M0} = 0.5 \cdot 20 \cdot 200 / 0.8 / 1000 = 2.5"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`codes`] - The formula catalog, one module per source standard
//! - [`formula`] - The contract every formula implements
//! - [`latex`] - Derivation rendering value object
//! - [`validations`] - Shared precondition guards
//! - [`units`] - Semantic unit aliases and fixed conversion multipliers
//! - [`errors`] - Structured error types

pub mod codes;
pub mod errors;
pub mod formula;
pub mod latex;
pub mod units;
pub mod validations;

// Re-export commonly used types at crate root for convenience
pub use codes::Standard;
pub use errors::{CalcError, CalcResult};
pub use formula::Formula;
pub use latex::LatexFormula;
