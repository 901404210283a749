//! # Declared Units
//!
//! The unit of analysis a PCF is normalized to. Emissions values are
//! expressed per declared unit (kgCO2e per declared unit), so the unit
//! token is load-bearing for every downstream calculation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use pcfx_core::PcfxError;

/// The unit of analysis of a product.
///
/// The wire tokens contain spaces (`"kilowatt hour"`, `"ton kilometer"`);
/// they are matched exactly. [`DeclaredUnit::short_str`] provides a compact
/// display form for human-facing rendering only; it is never accepted as a
/// wire token and never used for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclaredUnit {
    /// For unit liter.
    #[serde(rename = "liter")]
    Liter,
    /// For unit kilogram.
    #[serde(rename = "kilogram")]
    Kilogram,
    /// For unit cubic meter.
    #[serde(rename = "cubic meter")]
    CubicMeter,
    /// For unit kilowatt hour.
    #[serde(rename = "kilowatt hour")]
    KilowattHour,
    /// For unit megajoule.
    #[serde(rename = "megajoule")]
    Megajoule,
    /// For unit ton kilometer.
    #[serde(rename = "ton kilometer")]
    TonKilometer,
    /// For unit square meter.
    #[serde(rename = "square meter")]
    SquareMeter,
}

impl DeclaredUnit {
    /// Returns all declared units in canonical order.
    pub fn all() -> &'static [DeclaredUnit] {
        &[
            Self::Liter,
            Self::Kilogram,
            Self::CubicMeter,
            Self::KilowattHour,
            Self::Megajoule,
            Self::TonKilometer,
            Self::SquareMeter,
        ]
    }

    /// The exact wire token for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liter => "liter",
            Self::Kilogram => "kilogram",
            Self::CubicMeter => "cubic meter",
            Self::KilowattHour => "kilowatt hour",
            Self::Megajoule => "megajoule",
            Self::TonKilometer => "ton kilometer",
            Self::SquareMeter => "square meter",
        }
    }

    /// Short display form (`"Kg"`, `"KWh"`, ...), for human-facing output
    /// such as report rendering. Not a wire token.
    pub fn short_str(&self) -> &'static str {
        match self {
            Self::Liter => "L",
            Self::Kilogram => "Kg",
            Self::CubicMeter => "m^3",
            Self::KilowattHour => "KWh",
            Self::Megajoule => "MJ",
            Self::TonKilometer => "tkm",
            Self::SquareMeter => "sq m",
        }
    }
}

impl std::fmt::Display for DeclaredUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeclaredUnit {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "liter" => Ok(Self::Liter),
            "kilogram" => Ok(Self::Kilogram),
            "cubic meter" => Ok(Self::CubicMeter),
            "kilowatt hour" => Ok(Self::KilowattHour),
            "megajoule" => Ok(Self::Megajoule),
            "ton kilometer" => Ok(Self::TonKilometer),
            "square meter" => Ok(Self::SquareMeter),
            other => Err(PcfxError::UnrecognizedToken {
                vocabulary: "DeclaredUnit",
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
        for unit in DeclaredUnit::all() {
            let parsed: DeclaredUnit = unit.as_str().parse().unwrap();
            assert_eq!(*unit, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("not-a-real-unit".parse::<DeclaredUnit>().is_err());
        assert!("Liter".parse::<DeclaredUnit>().is_err()); // case-sensitive
        assert!(" liter".parse::<DeclaredUnit>().is_err()); // no trimming
        assert!("".parse::<DeclaredUnit>().is_err());
    }

    #[test]
    fn test_unrecognized_token_error_names_vocabulary() {
        let err = "furlong".parse::<DeclaredUnit>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized DeclaredUnit token: \"furlong\""
        );
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for unit in DeclaredUnit::all() {
            let json = serde_json::to_string(unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit.as_str()));
        }
    }

    #[test]
    fn test_serde_rejects_unknown_token() {
        assert!(serde_json::from_str::<DeclaredUnit>("\"not-a-real-unit\"").is_err());
    }

    #[test]
    fn test_short_str_distinct() {
        let mut seen = std::collections::HashSet::new();
        for unit in DeclaredUnit::all() {
            assert!(seen.insert(unit.short_str()), "duplicate short form");
        }
    }

    #[test]
    fn test_short_str_not_a_wire_token() {
        for unit in DeclaredUnit::all() {
            assert!(unit.short_str().parse::<DeclaredUnit>().is_err());
        }
    }
}
