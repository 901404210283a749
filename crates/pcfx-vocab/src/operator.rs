//! # Product Category Rule Operators
//!
//! Publishers of product-specific or sector-specific rule sets (PCRs).
//! `Other` is the escape hatch for operators outside the published list;
//! a rule entry using it must name the operator in `otherOperatorName`,
//! a coupling the validator enforces.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use pcfx_core::PcfxError;

/// The operator that published a product or sector specific rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleOperator {
    /// EU / PEF Methodology PCRs.
    #[serde(rename = "PEF")]
    Pef,
    /// PCRs authored or published by EPD International.
    #[serde(rename = "EPD International")]
    EpdInternational,
    /// A PCR published by an operator not in this vocabulary.
    Other,
}

impl RuleOperator {
    /// Returns all operators in canonical order.
    pub fn all() -> &'static [RuleOperator] {
        &[Self::Pef, Self::EpdInternational, Self::Other]
    }

    /// The exact wire token for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pef => "PEF",
            Self::EpdInternational => "EPD International",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for RuleOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleOperator {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PEF" => Ok(Self::Pef),
            "EPD International" => Ok(Self::EpdInternational),
            "Other" => Ok(Self::Other),
            other => Err(PcfxError::UnrecognizedToken {
                vocabulary: "RuleOperator",
                token: other.to_owned(),
            }),
        }
    }
}
