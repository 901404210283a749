//! # Biogenic Accounting Methodologies
//!
//! The standard followed to account for biogenic emissions and removals.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use pcfx_core::PcfxError;

/// The standard followed to account for biogenic emissions and removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiogenicAccountingMethodology {
    /// The EU Product Environmental Footprint Guide.
    #[serde(rename = "PEF")]
    Pef,
    /// The ISO 14067 standard.
    #[serde(rename = "ISO")]
    Iso,
    /// The Greenhouse Gas Protocol Land Sector and Removals Guidance.
    #[serde(rename = "GHGP")]
    Ghgp,
    /// The Quantis Accounting for Natural Climate Solutions Guidance.
    #[serde(rename = "Quantis")]
    Quantis,
}

impl BiogenicAccountingMethodology {
    /// Returns all methodologies in canonical order.
    pub fn all() -> &'static [BiogenicAccountingMethodology] {
        &[Self::Pef, Self::Iso, Self::Ghgp, Self::Quantis]
    }

    /// The exact wire token for this methodology.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pef => "PEF",
            Self::Iso => "ISO",
            Self::Ghgp => "GHGP",
            Self::Quantis => "Quantis",
        }
    }
}

impl std::fmt::Display for BiogenicAccountingMethodology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiogenicAccountingMethodology {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PEF" => Ok(Self::Pef),
            "ISO" => Ok(Self::Iso),
            "GHGP" => Ok(Self::Ghgp),
            "Quantis" => Ok(Self::Quantis),
            other => Err(PcfxError::UnrecognizedToken {
                vocabulary: "BiogenicAccountingMethodology",
                token: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_roundtrip() {
        for methodology in BiogenicAccountingMethodology::all() {
            let parsed: BiogenicAccountingMethodology = methodology.as_str().parse().unwrap();
            assert_eq!(*methodology, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("pef".parse::<BiogenicAccountingMethodology>().is_err());
        assert!("ISO 14067".parse::<BiogenicAccountingMethodology>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for methodology in BiogenicAccountingMethodology::all() {
            let json = serde_json::to_string(methodology).unwrap();
            assert_eq!(json, format!("\"{}\"", methodology.as_str()));
        }
    }
}
