//! # Cross-Sectoral Standards
//!
//! The accounting standards a PCF can be calculated or allocated under,
//! and assured against.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use pcfx_core::PcfxError;

/// A cross-sectoral GHG accounting standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrossSectoralStandard {
    /// The GHG Protocol Product standard.
    #[serde(rename = "GHG Protocol Product standard")]
    GhgProtocol,
    /// ISO Standard 14067.
    #[serde(rename = "ISO Standard 14067")]
    Iso14067,
    /// ISO Standard 14044.
    #[serde(rename = "ISO Standard 14044")]
    Iso14044,
}

impl CrossSectoralStandard {
    /// Returns all standards in canonical order.
    pub fn all() -> &'static [CrossSectoralStandard] {
        &[Self::GhgProtocol, Self::Iso14067, Self::Iso14044]
    }

    /// The exact wire token for this standard.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GhgProtocol => "GHG Protocol Product standard",
            Self::Iso14067 => "ISO Standard 14067",
            Self::Iso14044 => "ISO Standard 14044",
        }
    }
}

impl std::fmt::Display for CrossSectoralStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrossSectoralStandard {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GHG Protocol Product standard" => Ok(Self::GhgProtocol),
            "ISO Standard 14067" => Ok(Self::Iso14067),
            "ISO Standard 14044" => Ok(Self::Iso14044),
            other => Err(PcfxError::UnrecognizedToken {
                vocabulary: "CrossSectoralStandard",
                token: other.to_owned(),
            }),
        }
    }
}
