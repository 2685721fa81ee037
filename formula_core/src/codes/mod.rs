//! # Formula Catalog
//!
//! Concrete clause implementations, grouped one module per source
//! standard. Every formula here satisfies the [`crate::formula::Formula`]
//! contract; the modules differ only in which clauses they cover.
//!
//! ## Modules
//!
//! - [`en_1992_1_1`] - NEN-EN 1992-1-1+C2:2011 (concrete structures)
//! - [`en_1993_5`] - NEN-EN 1993-5:2008 (steel piling)
//! - [`nen_9997_1`] - NEN 9997-1+C2:2017 (geotechnical design)

use serde::{Deserialize, Serialize};

pub mod en_1992_1_1;
pub mod en_1993_5;
pub mod nen_9997_1;

/// Source document a formula is drawn from.
///
/// Every formula cites its standard for auditability; the citation text
/// is what a calculation report prints next to the clause number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Standard {
    /// NEN-EN 1992-1-1+C2:2011 Eurocode 2: Design of concrete structures
    NenEn1992_1_1C2_2011,
    /// NEN-EN 1993-5:2008 Eurocode 3: Design of steel structures - Part 5: Piling
    NenEn1993_5_2008,
    /// NEN 9997-1+C2:2017 Geotechnical design of structures
    Nen9997_1C2_2017,
}

impl Standard {
    /// Format the reference for display in reports
    pub fn citation(&self) -> &'static str {
        match self {
            Standard::NenEn1992_1_1C2_2011 => "NEN-EN 1992-1-1+C2:2011",
            Standard::NenEn1993_5_2008 => "NEN-EN 1993-5:2008",
            Standard::Nen9997_1C2_2017 => "NEN 9997-1+C2:2017",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citations() {
        assert_eq!(
            Standard::NenEn1992_1_1C2_2011.citation(),
            "NEN-EN 1992-1-1+C2:2011"
        );
        assert_eq!(Standard::NenEn1993_5_2008.citation(), "NEN-EN 1993-5:2008");
        assert_eq!(Standard::Nen9997_1C2_2017.citation(), "NEN 9997-1+C2:2017");
    }
}
