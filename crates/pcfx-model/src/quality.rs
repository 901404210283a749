//! # Data Quality Indicators
//!
//! Quantitative data quality ratings (DQRs) for the sources used in a PCF
//! calculation, each a weighted average over all inputs representing more
//! than 5% of the PCF emissions. Each rating is a decimal in [1, 3];
//! `coveragePercent` is the share of the PCF covered by the assessment,
//! in [0, 100]. Bounds are enforced by the validator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Data quality indicators of a carbon footprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityIndicators {
    /// Percentage of PCF emissions included in the assessment, based on
    /// the >5% emissions threshold.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub coverage_percent: Decimal,

    /// Technological representativeness of the sources used.
    #[serde(rename = "technologicalDQR", with = "rust_decimal::serde::arbitrary_precision")]
    pub technological_dqr: Decimal,

    /// Temporal representativeness of the sources used.
    #[serde(rename = "temporalDQR", with = "rust_decimal::serde::arbitrary_precision")]
    pub temporal_dqr: Decimal,

    /// Geographical representativeness of the sources used.
    #[serde(rename = "geographicalDQR", with = "rust_decimal::serde::arbitrary_precision")]
    pub geographical_dqr: Decimal,

    /// Completeness of the data collected.
    #[serde(rename = "completenessDQR", with = "rust_decimal::serde::arbitrary_precision")]
    pub completeness_dqr: Decimal,

    /// Reliability of the data collected.
    #[serde(rename = "reliabilityDQR", with = "rust_decimal::serde::arbitrary_precision")]
    pub reliability_dqr: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let dqi = DataQualityIndicators {
            coverage_percent: Decimal::new(871, 1),
            technological_dqr: Decimal::new(20, 1),
            temporal_dqr: Decimal::new(21, 1),
            geographical_dqr: Decimal::new(11, 1),
            completeness_dqr: Decimal::new(30, 1),
            reliability_dqr: Decimal::new(16, 1),
        };
        let value = serde_json::to_value(&dqi).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "coveragePercent",
            "technologicalDQR",
            "temporalDQR",
            "geographicalDQR",
            "completenessDQR",
            "reliabilityDQR",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
    }

    #[test]
    fn test_decimal_digits_preserved() {
        let json = r#"{
            "coveragePercent": 87.1,
            "technologicalDQR": 2.0,
            "temporalDQR": 2.1,
            "geographicalDQR": 1.1,
            "completenessDQR": 3.0,
            "reliabilityDQR": 1.6
        }"#;
        let dqi: DataQualityIndicators = serde_json::from_str(json).unwrap();
        assert_eq!(dqi.technological_dqr.to_string(), "2.0");
        let back = serde_json::to_value(&dqi).unwrap();
        assert_eq!(back["completenessDQR"].to_string(), "3.0");
    }
}
