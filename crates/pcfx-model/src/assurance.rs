//! # Assurance
//!
//! Independent third-party verification of a carbon footprint against a
//! named standard.

use serde::{Deserialize, Serialize};

use pcfx_core::Timestamp;
use pcfx_vocab::{AssuranceBoundary, AssuranceCoverage, AssuranceLevel, CrossSectoralStandard};

/// Assurance information for a carbon footprint.
///
/// `coverage`, `level` and `boundary` may only be defined when assurance
/// was actually performed, and `provider_name` must name the third party
/// engaged; both rules are semantic and enforced by the validator rather
/// than at decode time, so a producer gets the full list of problems in
/// one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assurance {
    /// Whether the footprint has been assured. Always serialized, so a
    /// record is self-describing about its assurance state.
    #[serde(default)]
    pub assurance: bool,

    /// Granularity of the emissions data assured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<AssuranceCoverage>,

    /// Level of assurance applicable to the PCF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<AssuranceLevel>,

    /// Boundary of the assurance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<AssuranceBoundary>,

    /// Name of the independent third party engaged to undertake the
    /// assurance. Decodes leniently to the empty string when absent;
    /// the validator rejects empty names.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider_name: String,

    /// The date at which the assurance was completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Name of the standard against which the PCF was assured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_name: Option<CrossSectoralStandard>,

    /// Any additional comments clarifying the interpretation of the
    /// assurance. May be the empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_decode_defaults() {
        // Absent flag and provider decode to falsy defaults; rejecting
        // them is the validator's job.
        let assurance: Assurance = serde_json::from_str("{}").unwrap();
        assert!(!assurance.assurance);
        assert!(assurance.provider_name.is_empty());
        assert!(assurance.coverage.is_none());
    }

    #[test]
    fn test_full_roundtrip() {
        let json = r#"{
            "assurance": true,
            "coverage": "PCF system",
            "level": "limited",
            "boundary": "Cradle-to-Gate",
            "providerName": "Veritas Climate Audit GmbH",
            "completedAt": "2024-03-01T09:00:00Z",
            "standardName": "ISO Standard 14067",
            "comments": ""
        }"#;
        let assurance: Assurance = serde_json::from_str(json).unwrap();
        assert!(assurance.assurance);
        assert_eq!(assurance.level, Some(AssuranceLevel::Limited));
        assert_eq!(assurance.comments.as_deref(), Some(""));

        let back = serde_json::to_value(&assurance).unwrap();
        let reparsed: Assurance = serde_json::from_value(back).unwrap();
        assert_eq!(assurance, reparsed);
    }

    #[test]
    fn test_unknown_coverage_token_rejected() {
        let json = r#"{"assurance": true, "coverage": "site level", "providerName": "x"}"#;
        assert!(serde_json::from_str::<Assurance>(json).is_err());
    }
}
