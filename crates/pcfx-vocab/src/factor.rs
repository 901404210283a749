//! # Characterization Factors
//!
//! The IPCC assessment report whose 100-year GWP characterization factors
//! were used to convert GHG masses into CO2 equivalents.
//!
//! This is the one vocabulary expected to grow over time: each new IPCC
//! assessment report adds a token. Tokens of the shape `AR<digits>` beyond
//! the known reports are therefore parsed into
//! [`CharacterizationFactor::Provisional`] rather than rejected, and the
//! validator reports them as a warning instead of silently accepting them.
//! Anything outside that shape remains a hard parse failure.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use pcfx_core::PcfxError;

/// The IPCC assessment report providing the GWP characterization factors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CharacterizationFactor {
    /// The Fifth Assessment Report of the IPCC.
    Ar5,
    /// The Sixth Assessment Report of the IPCC.
    Ar6,
    /// An `AR<n>` token beyond the reports known to this build, carried
    /// verbatim. Plausible but unverified; surfaced as a validation
    /// warning, never silently accepted.
    Provisional(String),
}

impl CharacterizationFactor {
    /// Returns the assessment reports known to this build, in canonical
    /// order. `Provisional` values are by definition not listed.
    pub fn known() -> &'static [CharacterizationFactor] {
        &[Self::Ar5, Self::Ar6]
    }

    /// The exact wire token for this factor set.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ar5 => "AR5",
            Self::Ar6 => "AR6",
            Self::Provisional(token) => token,
        }
    }

    /// Whether this is a plausible future report rather than a known one.
    pub fn is_provisional(&self) -> bool {
        matches!(self, Self::Provisional(_))
    }
}

impl std::fmt::Display for CharacterizationFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterizationFactor {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AR5" => Ok(Self::Ar5),
            "AR6" => Ok(Self::Ar6),
            other => {
                let digits = other.strip_prefix("AR").unwrap_or("");
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    Ok(Self::Provisional(other.to_owned()))
                } else {
                    Err(PcfxError::UnrecognizedToken {
                        vocabulary: "CharacterizationFactor",
                        token: other.to_owned(),
                    })
                }
            }
        }
    }
}

impl Serialize for CharacterizationFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CharacterizationFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_roundtrip_known() {
        for factor in CharacterizationFactor::known() {
            let parsed: CharacterizationFactor = factor.as_str().parse().unwrap();
            assert_eq!(*factor, parsed);
        }
    }

    #[test]
    fn test_future_report_parses_as_provisional() {
        let parsed: CharacterizationFactor = "AR7".parse().unwrap();
        assert_eq!(parsed, CharacterizationFactor::Provisional("AR7".into()));
        assert!(parsed.is_provisional());
        // Round-trip holds for provisional tokens too.
        assert_eq!(parsed.as_str(), "AR7");
    }

    #[test]
    fn test_known_reports_are_not_provisional() {
        assert!(!"AR5".parse::<CharacterizationFactor>().unwrap().is_provisional());
        assert!(!"AR6".parse::<CharacterizationFactor>().unwrap().is_provisional());
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("XR7".parse::<CharacterizationFactor>().is_err());
        assert!("AR".parse::<CharacterizationFactor>().is_err());
        assert!("AR6a".parse::<CharacterizationFactor>().is_err());
        assert!("ar6".parse::<CharacterizationFactor>().is_err());
        assert!("".parse::<CharacterizationFactor>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for factor in CharacterizationFactor::known() {
            let json = serde_json::to_string(factor).unwrap();
            assert_eq!(json, format!("\"{}\"", factor.as_str()));
        }
        let provisional: CharacterizationFactor = serde_json::from_str("\"AR8\"").unwrap();
        assert_eq!(serde_json::to_string(&provisional).unwrap(), "\"AR8\"");
    }
}
