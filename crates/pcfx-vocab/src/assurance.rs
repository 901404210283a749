//! # Assurance Qualifiers
//!
//! The three closed vocabularies qualifying a third-party assurance:
//! coverage granularity, assurance level, and assurance boundary. All three
//! may only be defined when assurance was actually performed; the validator
//! enforces that coupling.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use pcfx_core::PcfxError;

/// Granularity of the emissions data assured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssuranceCoverage {
    /// Corporate level.
    #[serde(rename = "corporate level")]
    CorporateLevel,
    /// Product line.
    #[serde(rename = "product line")]
    ProductLine,
    /// PCF system.
    #[serde(rename = "PCF system")]
    PcfSystem,
    /// Product level.
    #[serde(rename = "product level")]
    ProductLevel,
}

impl AssuranceCoverage {
    /// Returns all coverage levels in canonical order.
    pub fn all() -> &'static [AssuranceCoverage] {
        &[
            Self::CorporateLevel,
            Self::ProductLine,
            Self::PcfSystem,
            Self::ProductLevel,
        ]
    }

    /// The exact wire token for this coverage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CorporateLevel => "corporate level",
            Self::ProductLine => "product line",
            Self::PcfSystem => "PCF system",
            Self::ProductLevel => "product level",
        }
    }
}

impl std::fmt::Display for AssuranceCoverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssuranceCoverage {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corporate level" => Ok(Self::CorporateLevel),
            "product line" => Ok(Self::ProductLine),
            "PCF system" => Ok(Self::PcfSystem),
            "product level" => Ok(Self::ProductLevel),
            other => Err(PcfxError::UnrecognizedToken {
                vocabulary: "AssuranceCoverage",
                token: other.to_owned(),
            }),
        }
    }
}

/// Level of assurance applicable to the PCF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssuranceLevel {
    /// Limited assurance.
    #[serde(rename = "limited")]
    Limited,
    /// Reasonable assurance.
    #[serde(rename = "reasonable")]
    Reasonable,
}

impl AssuranceLevel {
    /// Returns both levels in canonical order.
    pub fn all() -> &'static [AssuranceLevel] {
        &[Self::Limited, Self::Reasonable]
    }

    /// The exact wire token for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limited => "limited",
            Self::Reasonable => "reasonable",
        }
    }
}

impl std::fmt::Display for AssuranceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssuranceLevel {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "limited" => Ok(Self::Limited),
            "reasonable" => Ok(Self::Reasonable),
            other => Err(PcfxError::UnrecognizedToken {
                vocabulary: "AssuranceLevel",
                token: other.to_owned(),
            }),
        }
    }
}

/// Boundary of the assurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssuranceBoundary {
    /// Gate-to-Gate.
    #[serde(rename = "Gate-to-Gate")]
    GateToGate,
    /// Cradle-to-Gate.
    #[serde(rename = "Cradle-to-Gate")]
    CradleToGate,
}

impl AssuranceBoundary {
    /// Returns both boundaries in canonical order.
    pub fn all() -> &'static [AssuranceBoundary] {
        &[Self::GateToGate, Self::CradleToGate]
    }

    /// The exact wire token for this boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GateToGate => "Gate-to-Gate",
            Self::CradleToGate => "Cradle-to-Gate",
        }
    }
}

impl std::fmt::Display for AssuranceBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssuranceBoundary {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gate-to-Gate" => Ok(Self::GateToGate),
            "Cradle-to-Gate" => Ok(Self::CradleToGate),
            other => Err(PcfxError::UnrecognizedToken {
                vocabulary: "AssuranceBoundary",
                token: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_roundtrip() {
        for coverage in AssuranceCoverage::all() {
            let parsed: AssuranceCoverage = coverage.as_str().parse().unwrap();
            assert_eq!(*coverage, parsed);
        }
    }

    #[test]
    fn test_level_roundtrip() {
        for level in AssuranceLevel::all() {
            let parsed: AssuranceLevel = level.as_str().parse().unwrap();
            assert_eq!(*level, parsed);
        }
    }

    #[test]
    fn test_boundary_roundtrip() {
        for boundary in AssuranceBoundary::all() {
            let parsed: AssuranceBoundary = boundary.as_str().parse().unwrap();
            assert_eq!(*boundary, parsed);
        }
    }

    #[test]
    fn test_invalid_tokens() {
        assert!("corporate".parse::<AssuranceCoverage>().is_err());
        assert!("Limited".parse::<AssuranceLevel>().is_err());
        assert!("gate-to-gate".parse::<AssuranceBoundary>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for coverage in AssuranceCoverage::all() {
            let json = serde_json::to_string(coverage).unwrap();
            assert_eq!(json, format!("\"{}\"", coverage.as_str()));
        }
        for level in AssuranceLevel::all() {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
        for boundary in AssuranceBoundary::all() {
            let json = serde_json::to_string(boundary).unwrap();
            assert_eq!(json, format!("\"{}\"", boundary.as_str()));
        }
    }
}
