//! # Unit Aliases
//!
//! Semantic aliases for the physical quantities that appear in formula
//! signatures. Eurocode clauses fix the unit of every symbol, so a plain
//! `f64` alias documents the expected unit without imposing wrapper
//! syntax on the algebra; the formula instance itself is the typed,
//! number-like result.
//!
//! Conversions between units are limited to fixed multipliers; there is
//! no unit-conversion engine.

/// Stress or strength in megapascals (N/mm²)
pub type Mpa = f64;
/// Length in millimetres
pub type Mm = f64;
/// Section modulus in cubic millimetres (per metre where the clause says so)
pub type Mm3 = f64;
/// Force in kilonewtons
pub type Kn = f64;
/// Bending moment in kilonewton-metres (per metre where the clause says so)
pub type KnM = f64;
/// Angle in degrees
pub type Deg = f64;
/// Length in metres
pub type M = f64;
/// Ratio or factor without physical unit
pub type Dimensionless = f64;

/// Newtons to kilonewtons
pub const N_TO_KN: f64 = 1e-3;
/// Kilonewtons to newtons
pub const KN_TO_N: f64 = 1e3;
/// Newton-millimetres to kilonewton-metres
pub const NMM_TO_KNM: f64 = 1e-6;
/// Millimetres to metres
pub const MM_TO_M: f64 = 1e-3;
