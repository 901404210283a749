//! # Geographic Regions and Subregions
//!
//! The UN M49 regions and subregions a carbon footprint can be scoped to.
//! A footprint may instead be scoped to an ISO 3166 country or country
//! subdivision; those are shape-validated strings, not members of this
//! vocabulary.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use pcfx_core::PcfxError;

/// Total number of regions and subregions.
pub const REGION_OR_SUBREGION_COUNT: usize = 22;

/// A UN geographic region or subregion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionOrSubregion {
    /// The UN geographic region Africa.
    #[serde(rename = "Africa")]
    Africa,
    /// The UN geographic region Americas.
    #[serde(rename = "Americas")]
    Americas,
    /// The UN geographic region Asia.
    #[serde(rename = "Asia")]
    Asia,
    /// The UN geographic region Europe.
    #[serde(rename = "Europe")]
    Europe,
    /// The UN geographic region Oceania.
    #[serde(rename = "Oceania")]
    Oceania,
    /// The UN geographic subregion Australia and New Zealand.
    #[serde(rename = "Australia and New Zealand")]
    AustraliaAndNewZealand,
    /// The UN geographic subregion Central Asia.
    #[serde(rename = "Central Asia")]
    CentralAsia,
    /// The UN geographic subregion Eastern Asia.
    #[serde(rename = "Eastern Asia")]
    EasternAsia,
    /// The UN geographic subregion Eastern Europe.
    #[serde(rename = "Eastern Europe")]
    EasternEurope,
    /// The UN geographic subregion Latin America and the Caribbean.
    #[serde(rename = "Latin America and the Caribbean")]
    LatinAmericaAndCaribbean,
    /// The UN geographic subregion Melanesia.
    #[serde(rename = "Melanesia")]
    Melanesia,
    /// The UN geographic subregion Micronesia.
    #[serde(rename = "Micronesia")]
    Micronesia,
    /// The UN geographic subregion Northern Africa.
    #[serde(rename = "Northern Africa")]
    NorthernAfrica,
    /// The UN geographic subregion Northern America.
    #[serde(rename = "Northern America")]
    NorthernAmerica,
    /// The UN geographic subregion Northern Europe.
    #[serde(rename = "Northern Europe")]
    NorthernEurope,
    /// The UN geographic subregion Polynesia.
    #[serde(rename = "Polynesia")]
    Polynesia,
    /// The UN geographic subregion South-eastern Asia.
    #[serde(rename = "South-eastern Asia")]
    SouthEasternAsia,
    /// The UN geographic subregion Southern Asia.
    #[serde(rename = "Southern Asia")]
    SouthernAsia,
    /// The UN geographic subregion Southern Europe.
    #[serde(rename = "Southern Europe")]
    SouthernEurope,
    /// The UN geographic subregion Sub-Saharan Africa.
    #[serde(rename = "Sub-Saharan Africa")]
    SubSaharanAfrica,
    /// The UN geographic subregion Western Asia.
    #[serde(rename = "Western Asia")]
    WesternAsia,
    /// The UN geographic subregion Western Europe.
    #[serde(rename = "Western Europe")]
    WesternEurope,
}

impl RegionOrSubregion {
    /// Returns all regions and subregions in canonical order.
    pub fn all() -> &'static [RegionOrSubregion] {
        &[
            Self::Africa,
            Self::Americas,
            Self::Asia,
            Self::Europe,
            Self::Oceania,
            Self::AustraliaAndNewZealand,
            Self::CentralAsia,
            Self::EasternAsia,
            Self::EasternEurope,
            Self::LatinAmericaAndCaribbean,
            Self::Melanesia,
            Self::Micronesia,
            Self::NorthernAfrica,
            Self::NorthernAmerica,
            Self::NorthernEurope,
            Self::Polynesia,
            Self::SouthEasternAsia,
            Self::SouthernAsia,
            Self::SouthernEurope,
            Self::SubSaharanAfrica,
            Self::WesternAsia,
            Self::WesternEurope,
        ]
    }

    /// The exact wire token for this region or subregion.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
            Self::AustraliaAndNewZealand => "Australia and New Zealand",
            Self::CentralAsia => "Central Asia",
            Self::EasternAsia => "Eastern Asia",
            Self::EasternEurope => "Eastern Europe",
            Self::LatinAmericaAndCaribbean => "Latin America and the Caribbean",
            Self::Melanesia => "Melanesia",
            Self::Micronesia => "Micronesia",
            Self::NorthernAfrica => "Northern Africa",
            Self::NorthernAmerica => "Northern America",
            Self::NorthernEurope => "Northern Europe",
            Self::Polynesia => "Polynesia",
            Self::SouthEasternAsia => "South-eastern Asia",
            Self::SouthernAsia => "Southern Asia",
            Self::SouthernEurope => "Southern Europe",
            Self::SubSaharanAfrica => "Sub-Saharan Africa",
            Self::WesternAsia => "Western Asia",
            Self::WesternEurope => "Western Europe",
        }
    }
}

impl std::fmt::Display for RegionOrSubregion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionOrSubregion {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Africa" => Ok(Self::Africa),
            "Americas" => Ok(Self::Americas),
            "Asia" => Ok(Self::Asia),
            "Europe" => Ok(Self::Europe),
            "Oceania" => Ok(Self::Oceania),
            "Australia and New Zealand" => Ok(Self::AustraliaAndNewZealand),
            "Central Asia" => Ok(Self::CentralAsia),
            "Eastern Asia" => Ok(Self::EasternAsia),
            "Eastern Europe" => Ok(Self::EasternEurope),
            "Latin America and the Caribbean" => Ok(Self::LatinAmericaAndCaribbean),
            "Melanesia" => Ok(Self::Melanesia),
            "Micronesia" => Ok(Self::Micronesia),
            "Northern Africa" => Ok(Self::NorthernAfrica),
            "Northern America" => Ok(Self::NorthernAmerica),
            "Northern Europe" => Ok(Self::NorthernEurope),
            "Polynesia" => Ok(Self::Polynesia),
            "South-eastern Asia" => Ok(Self::SouthEasternAsia),
            "Southern Asia" => Ok(Self::SouthernAsia),
            "Southern Europe" => Ok(Self::SouthernEurope),
            "Sub-Saharan Africa" => Ok(Self::SubSaharanAfrica),
            "Western Asia" => Ok(Self::WesternAsia),
            "Western Europe" => Ok(Self::WesternEurope),
            other => Err(PcfxError::UnrecognizedToken {
                vocabulary: "RegionOrSubregion",
                token: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_count() {
        assert_eq!(RegionOrSubregion::all().len(), REGION_OR_SUBREGION_COUNT);
    }

    #[test]
    fn test_all_unique() {
        let mut seen = std::collections::HashSet::new();
        for region in RegionOrSubregion::all() {
            assert!(seen.insert(region), "duplicate region: {region}");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for region in RegionOrSubregion::all() {
            let parsed: RegionOrSubregion = region.as_str().parse().unwrap();
            assert_eq!(*region, parsed);
        }
    }

    #[test]
    fn test_western_europe_token_has_space() {
        // The token is the UN name with a space, in both directions.
        assert_eq!(RegionOrSubregion::WesternEurope.as_str(), "Western Europe");
        assert_eq!(
            "Western Europe".parse::<RegionOrSubregion>().unwrap(),
            RegionOrSubregion::WesternEurope
        );
        assert!("WesternEurope".parse::<RegionOrSubregion>().is_err());
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("Atlantis".parse::<RegionOrSubregion>().is_err());
        assert!("africa".parse::<RegionOrSubregion>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for region in RegionOrSubregion::all() {
            let json = serde_json::to_string(region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.as_str()));
        }
    }
}
