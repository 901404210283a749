//! Whole-document decode tests: a complete footprint as a partner would
//! send it, plus the structural failure modes of the decode boundary.

use rust_decimal::Decimal;

use pcfx_model::{decode_str, encode, DataModelExtension};
use pcfx_vocab::{CharacterizationFactor, CrossSectoralStandard, DeclaredUnit, RuleOperator, Status};

const FULL_DOCUMENT: &str = r#"{
    "id": "d9be4477-e351-45b3-acd9-e1da05e6f633",
    "specVersion": "2.0.0",
    "precedingPfIds": ["8cfc7ad6-55b8-4b40-93d9-4ecf07cb3b4b"],
    "version": 1,
    "created": "2024-02-14T10:47:06Z",
    "updated": "2024-03-01T09:00:00Z",
    "status": "Active",
    "statusComment": "Initial publication, revised allocation",
    "validityPeriodStart": "2024-01-01T00:00:00Z",
    "validityPeriodEnd": "2026-12-31T00:00:00Z",
    "companyName": "Clean Product Corp.",
    "companyIds": ["urn:epc:id:sgln:4063973.00000.8"],
    "productDescription": "Bio-ethanol 98%, corn feedstock",
    "productIds": ["urn:gtin:4712345060507"],
    "productCategoryCpc": "3342",
    "productNameCompany": "Green Ethanol",
    "comment": "Cradle-to-gate per partner agreement",
    "pcf": {
        "declaredUnit": "liter",
        "unitaryProductAmount": 12.0,
        "pCfExcludingBiogenic": 0.323,
        "pCfIncludingBiogenic": -0.523,
        "fossilGhgEmissions": 0.123,
        "fossilCarbonContent": 0.0,
        "biogenicCarbonContent": 0.123,
        "dLucGhgEmissions": 1.2,
        "landManagementGhgEmissions": 0.01,
        "otherBiogenicGhgEmissions": 0.04,
        "iLucGhgEmissions": 0.5,
        "biogenicCarbonWithdrawal": -0.45,
        "aircraftGhgEmissions": 0.08,
        "characterizationFactors": "AR6",
        "crossSectoralStandardsUsed": ["GHG Protocol Product standard", "ISO Standard 14067"],
        "productOrSectorSpecificRules": [
            {
                "operator": "Other",
                "ruleNames": ["The Product Rule Book"],
                "otherOperatorName": "Rule Operators Ltd."
            }
        ],
        "biogenicAccountingMethodology": "GHGP",
        "boundaryProcessesDescription": "Feedstock cultivation, fermentation, distillation",
        "referencePeriodStart": "2023-01-01T00:00:00Z",
        "referencePeriodEnd": "2024-01-01T00:00:00Z",
        "geographyCountry": "DE",
        "secondaryEmissionFactorSources": ["ecoinvent 3.9.1"],
        "exemptedEmissionsPercent": 3.2,
        "exemptedEmissionsDescription": "Minor auxiliary inputs below threshold",
        "packagingEmissionsIncluded": true,
        "packagingGhgEmissions": 0.12,
        "allocationRulesDescription": "Economic allocation at the distillation step",
        "uncertaintyAssessmentDescription": "Monte Carlo, 95% interval within 8%",
        "primaryDataShare": 56.12,
        "dqi": {
            "coveragePercent": 87.0,
            "technologicalDQR": 2.0,
            "temporalDQR": 2.1,
            "geographicalDQR": 1.1,
            "completenessDQR": 1.3,
            "reliabilityDQR": 1.6
        },
        "assurance": {
            "assurance": true,
            "coverage": "PCF system",
            "level": "limited",
            "boundary": "Cradle-to-Gate",
            "providerName": "Veritas Climate Audit GmbH",
            "completedAt": "2024-02-10T12:00:00Z",
            "standardName": "ISO Standard 14067",
            "comments": "Sampling-based review"
        }
    },
    "extensions": [
        {
            "specVersion": "2.0.0",
            "dataSchema": "https://catalog.carbon-transparency.com/shipment/1.0.0/schema.json",
            "data": {"shipmentId": "S1234567890"}
        }
    ]
}"#;

#[test]
fn decodes_a_complete_document() {
    let pf = decode_str(FULL_DOCUMENT).expect("full document should decode");

    assert_eq!(pf.spec_version, "2.0.0");
    assert_eq!(pf.version, 1);
    assert_eq!(pf.status, Status::Active);
    assert_eq!(pf.company_ids.len(), 1);
    assert_eq!(pf.company_ids[0].as_str(), "urn:epc:id:sgln:4063973.00000.8");

    let pcf = &pf.pcf;
    assert_eq!(pcf.declared_unit, DeclaredUnit::Liter);
    assert_eq!(pcf.characterization_factors, CharacterizationFactor::Ar6);
    assert_eq!(
        pcf.cross_sectoral_standards_used,
        vec![
            CrossSectoralStandard::GhgProtocol,
            CrossSectoralStandard::Iso14067
        ]
    );
    assert_eq!(pcf.unitary_product_amount.to_string(), "12.0");
    assert_eq!(
        pcf.biogenic_carbon_withdrawal,
        Some(Decimal::new(-45, 2))
    );

    let rules = pcf.product_or_sector_specific_rules.as_ref().unwrap();
    assert_eq!(rules[0].operator, RuleOperator::Other);
    assert_eq!(rules[0].other_operator_name.as_deref(), Some("Rule Operators Ltd."));

    let assurance = pcf.assurance.as_ref().unwrap();
    assert!(assurance.assurance);
    assert_eq!(assurance.provider_name, "Veritas Climate Audit GmbH");

    let extensions: &[DataModelExtension] = pf.extensions.as_deref().unwrap();
    assert_eq!(extensions[0].data["shipmentId"], serde_json::json!("S1234567890"));
}

#[test]
fn reencoding_is_lossless() {
    let pf = decode_str(FULL_DOCUMENT).unwrap();
    let bytes = encode(&pf).unwrap();

    // Same value set, digit for digit: compare as JSON values so field
    // order is irrelevant but every literal must survive.
    let original: serde_json::Value = serde_json::from_str(FULL_DOCUMENT).unwrap();
    let reencoded: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(original, reencoded);
}

#[test]
fn decode_encode_decode_is_identity() {
    let pf = decode_str(FULL_DOCUMENT).unwrap();
    let bytes = encode(&pf).unwrap();
    let again = pcfx_model::decode(&bytes).unwrap();
    assert_eq!(pf, again);
}

#[test]
fn unknown_top_level_fields_are_ignored() {
    let doc = FULL_DOCUMENT.replacen(
        "\"id\":",
        "\"aFieldFromTheFuture\": {\"nested\": [1,2,3]}, \"id\":",
        1,
    );
    assert!(decode_str(&doc).is_ok());
}

#[test]
fn missing_mandatory_envelope_field_fails() {
    let doc = FULL_DOCUMENT.replacen("\"companyName\": \"Clean Product Corp.\",", "", 1);
    let err = decode_str(&doc).unwrap_err();
    assert!(err.to_string().contains("companyName"));
}

#[test]
fn unknown_status_token_fails() {
    let doc = FULL_DOCUMENT.replacen("\"Active\"", "\"Archived\"", 1);
    assert!(decode_str(&doc).is_err());
}

#[test]
fn malformed_urn_fails() {
    let doc = FULL_DOCUMENT.replacen("urn:gtin:4712345060507", "gtin-4712345060507", 1);
    assert!(decode_str(&doc).is_err());
}

#[test]
fn offset_timestamp_fails() {
    let doc = FULL_DOCUMENT.replacen("2024-02-14T10:47:06Z", "2024-02-14T10:47:06+00:00", 1);
    assert!(decode_str(&doc).is_err());
}

#[test]
fn malformed_decimal_fails() {
    let doc = FULL_DOCUMENT.replacen("\"exemptedEmissionsPercent\": 3.2", "\"exemptedEmissionsPercent\": \"3.2%\"", 1);
    assert!(decode_str(&doc).is_err());
}

#[test]
fn provisional_characterization_factor_decodes() {
    let doc = FULL_DOCUMENT.replacen("\"AR6\"", "\"AR7\"", 1);
    let pf = decode_str(&doc).unwrap();
    assert!(pf.pcf.characterization_factors.is_provisional());
}

#[test]
fn unplausible_characterization_factor_fails() {
    let doc = FULL_DOCUMENT.replacen("\"AR6\"", "\"GWP-100\"", 1);
    assert!(decode_str(&doc).is_err());
}
