//! # Rule Catalogue
//!
//! Every structural and cross-field rule applied to a decoded footprint,
//! in the order the report presents them: envelope fields first, payload
//! fields second, cross-field couplings last, each group in field
//! declaration order. The order is part of the contract; reports for the
//! same record must be identical across runs.

use std::collections::HashSet;

use chrono::Months;
use rust_decimal::Decimal;

use pcfx_core::Timestamp;
use pcfx_model::{
    Assurance, CarbonFootprint, DataQualityIndicators, ProductFootprint,
    ProductOrSectorSpecificRule, SPEC_VERSION,
};
use pcfx_vocab::RuleOperator;

use crate::violation::Violation;

/// Unix epoch seconds of 2025-01-01T00:00:00Z, the date the data quality
/// reporting rules tighten.
pub const QUALITY_CUTOVER_SECS: i64 = 1_735_689_600;

/// Upper bound of the footprint `version` field (2^31 - 1).
const MAX_VERSION: u32 = i32::MAX as u32;

/// Maximum validity period after the reference period end, in months.
const MAX_VALIDITY_MONTHS: u32 = 36;

// ── Envelope ─────────────────────────────────────────────────────────

pub(crate) fn envelope_checks(pf: &ProductFootprint, out: &mut Vec<Violation>) {
    if !pf.id.is_v4() {
        out.push(Violation::error("id", "must be a version 4 UUID"));
    }

    if pf.spec_version != SPEC_VERSION {
        out.push(Violation::error(
            "specVersion",
            format!("must be {SPEC_VERSION}, got {:?}", pf.spec_version),
        ));
    }

    if let Some(ids) = &pf.preceding_pf_ids {
        if ids.is_empty() {
            out.push(Violation::error(
                "precedingPfIds",
                "must be non-empty when defined",
            ));
        }
        let mut seen = HashSet::new();
        for (i, id) in ids.iter().enumerate() {
            if !seen.insert(id) {
                out.push(Violation::error(
                    format!("precedingPfIds[{i}]"),
                    "duplicate preceding footprint identifier",
                ));
            }
        }
    }

    if pf.version > MAX_VERSION {
        out.push(Violation::error(
            "version",
            format!("must be at most {MAX_VERSION}"),
        ));
    }

    if let Some(updated) = pf.updated {
        if updated <= pf.created {
            out.push(Violation::error(
                "updated",
                "must be strictly after created",
            ));
        }
    }

    if pf.company_name.trim().is_empty() {
        out.push(Violation::error("companyName", "must be non-empty"));
    }
    if pf.company_ids.is_empty() {
        out.push(Violation::error("companyIds", "must be non-empty"));
    }
    if pf.product_ids.is_empty() {
        out.push(Violation::error("productIds", "must be non-empty"));
    }
    if pf.product_category_cpc.is_empty()
        || !pf.product_category_cpc.bytes().all(|b| b.is_ascii_digit())
    {
        out.push(Violation::error(
            "productCategoryCpc",
            "must be a UN CPC code (non-empty, digits only)",
        ));
    }
    if pf.product_name_company.trim().is_empty() {
        out.push(Violation::error("productNameCompany", "must be non-empty"));
    }

    if let Some(extensions) = &pf.extensions {
        if extensions.is_empty() {
            out.push(Violation::error(
                "extensions",
                "must be non-empty when defined",
            ));
        }
        for (i, extension) in extensions.iter().enumerate() {
            if extension.spec_version.is_empty() {
                out.push(Violation::error(
                    format!("extensions[{i}].specVersion"),
                    "must be non-empty",
                ));
            }
            if extension.data_schema.is_empty() {
                out.push(Violation::error(
                    format!("extensions[{i}].dataSchema"),
                    "must be non-empty",
                ));
            }
        }
    }
}

// ── Payload ──────────────────────────────────────────────────────────

pub(crate) fn payload_checks(pcf: &CarbonFootprint, out: &mut Vec<Violation>) {
    if pcf.unitary_product_amount <= Decimal::ZERO {
        out.push(Violation::error(
            "pcf.unitaryProductAmount",
            "must be strictly greater than 0",
        ));
    }

    non_negative("pcf.pCfExcludingBiogenic", pcf.p_cf_excluding_biogenic, out);
    non_negative("pcf.fossilGhgEmissions", pcf.fossil_ghg_emissions, out);
    non_negative("pcf.fossilCarbonContent", pcf.fossil_carbon_content, out);
    non_negative(
        "pcf.biogenicCarbonContent",
        pcf.biogenic_carbon_content,
        out,
    );
    non_negative_opt("pcf.dLucGhgEmissions", pcf.d_luc_ghg_emissions, out);
    non_negative_opt(
        "pcf.otherBiogenicGhgEmissions",
        pcf.other_biogenic_ghg_emissions,
        out,
    );
    non_negative_opt("pcf.iLucGhgEmissions", pcf.i_luc_ghg_emissions, out);

    if let Some(withdrawal) = pcf.biogenic_carbon_withdrawal {
        if withdrawal > Decimal::ZERO {
            out.push(Violation::error(
                "pcf.biogenicCarbonWithdrawal",
                "must be less than or equal to 0",
            ));
        }
    }
    non_negative_opt(
        "pcf.aircraftGhgEmissions",
        pcf.aircraft_ghg_emissions,
        out,
    );

    if pcf.characterization_factors.is_provisional() {
        out.push(Violation::warning(
            "pcf.characterizationFactors",
            format!(
                "{} is not an IPCC assessment report known to this build",
                pcf.characterization_factors
            ),
        ));
    }

    if pcf.cross_sectoral_standards_used.is_empty() {
        out.push(Violation::error(
            "pcf.crossSectoralStandardsUsed",
            "must be non-empty",
        ));
    }
    let mut seen = HashSet::new();
    for (i, standard) in pcf.cross_sectoral_standards_used.iter().enumerate() {
        if !seen.insert(standard) {
            out.push(Violation::error(
                format!("pcf.crossSectoralStandardsUsed[{i}]"),
                "duplicate standard",
            ));
        }
    }

    if let Some(rules) = &pcf.product_or_sector_specific_rules {
        rule_checks(rules, out);
    }

    if pcf.boundary_processes_description.trim().is_empty() {
        out.push(Violation::error(
            "pcf.boundaryProcessesDescription",
            "must be non-empty",
        ));
    }

    if let Some(subdivision) = &pcf.geography_country_subdivision {
        if !is_subdivision_code(subdivision) {
            out.push(Violation::error(
                "pcf.geographyCountrySubdivision",
                format!("{subdivision:?} is not an ISO 3166-2 subdivision code"),
            ));
        }
    }
    if let Some(country) = &pcf.geography_country {
        if !is_country_code(country) {
            out.push(Violation::error(
                "pcf.geographyCountry",
                format!("{country:?} is not an ISO 3166 alpha-2 country code"),
            ));
        }
    }

    if let Some(sources) = &pcf.secondary_emission_factor_sources {
        if sources.is_empty() {
            out.push(Violation::error(
                "pcf.secondaryEmissionFactorSources",
                "must be non-empty when defined",
            ));
        }
        for (i, source) in sources.iter().enumerate() {
            if source.trim().is_empty() {
                out.push(Violation::error(
                    format!("pcf.secondaryEmissionFactorSources[{i}]"),
                    "must be non-empty",
                ));
            }
        }
    }

    if pcf.exempted_emissions_percent < Decimal::ZERO
        || pcf.exempted_emissions_percent > Decimal::from(5)
    {
        out.push(Violation::error(
            "pcf.exemptedEmissionsPercent",
            "must be between 0 and 5 inclusive",
        ));
    }

    non_negative_opt(
        "pcf.packagingGhgEmissions",
        pcf.packaging_ghg_emissions,
        out,
    );

    if let Some(share) = pcf.primary_data_share {
        percent_range("pcf.primaryDataShare", share, out);
    }

    if let Some(dqi) = &pcf.dqi {
        quality_checks(dqi, out);
    }

    if let Some(assurance) = &pcf.assurance {
        assurance_checks(assurance, out);
    }
}

fn rule_checks(rules: &[ProductOrSectorSpecificRule], out: &mut Vec<Violation>) {
    if rules.is_empty() {
        out.push(Violation::error(
            "pcf.productOrSectorSpecificRules",
            "must be non-empty when defined",
        ));
    }
    for (i, rule) in rules.iter().enumerate() {
        let base = format!("pcf.productOrSectorSpecificRules[{i}]");

        if rule.rule_names.is_empty() {
            out.push(Violation::error(
                format!("{base}.ruleNames"),
                "must be non-empty",
            ));
        } else if rule.rule_names.iter().any(|name| name.trim().is_empty()) {
            out.push(Violation::error(
                format!("{base}.ruleNames"),
                "must not contain empty rule names",
            ));
        }

        match rule.operator {
            RuleOperator::Other => {
                let named = rule
                    .other_operator_name
                    .as_deref()
                    .is_some_and(|name| !name.trim().is_empty());
                if !named {
                    out.push(Violation::error(
                        format!("{base}.otherOperatorName"),
                        "mandatory and non-empty when operator is Other",
                    ));
                }
            }
            _ => {
                if rule.other_operator_name.is_some() {
                    out.push(Violation::error(
                        format!("{base}.otherOperatorName"),
                        "must be undefined unless operator is Other",
                    ));
                }
            }
        }
    }
}

fn quality_checks(dqi: &DataQualityIndicators, out: &mut Vec<Violation>) {
    percent_range("pcf.dqi.coveragePercent", dqi.coverage_percent, out);

    let ratings = [
        ("pcf.dqi.technologicalDQR", dqi.technological_dqr),
        ("pcf.dqi.temporalDQR", dqi.temporal_dqr),
        ("pcf.dqi.geographicalDQR", dqi.geographical_dqr),
        ("pcf.dqi.completenessDQR", dqi.completeness_dqr),
        ("pcf.dqi.reliabilityDQR", dqi.reliability_dqr),
    ];
    for (path, rating) in ratings {
        if rating < Decimal::ONE || rating > Decimal::from(3) {
            out.push(Violation::error(path, "must be between 1 and 3 inclusive"));
        }
    }
}

fn assurance_checks(assurance: &Assurance, out: &mut Vec<Violation>) {
    if assurance.provider_name.trim().is_empty() {
        out.push(Violation::error(
            "pcf.assurance.providerName",
            "must name the third party engaged",
        ));
    }

    // Coverage, level and boundary qualify an assurance that happened.
    if !assurance.assurance {
        if assurance.coverage.is_some() {
            out.push(Violation::error(
                "pcf.assurance.coverage",
                "may only be defined when assurance was performed",
            ));
        }
        if assurance.level.is_some() {
            out.push(Violation::error(
                "pcf.assurance.level",
                "may only be defined when assurance was performed",
            ));
        }
        if assurance.boundary.is_some() {
            out.push(Violation::error(
                "pcf.assurance.boundary",
                "may only be defined when assurance was performed",
            ));
        }
    }
}

// ── Cross-field ──────────────────────────────────────────────────────

pub(crate) fn cross_field_checks(
    pf: &ProductFootprint,
    now: Timestamp,
    out: &mut Vec<Violation>,
) {
    let pcf = &pf.pcf;

    // 1. Reference period ordering.
    if pcf.reference_period_end <= pcf.reference_period_start {
        out.push(Violation::error(
            "pcf.referencePeriodEnd",
            "must be strictly after referencePeriodStart",
        ));
    }

    // 2. Validity window.
    match (pf.validity_period_start, pf.validity_period_end) {
        (None, None) => {}
        (Some(_), None) => {
            out.push(Violation::error(
                "validityPeriodEnd",
                "must be defined when validityPeriodStart is",
            ));
        }
        (None, Some(_)) => {
            out.push(Violation::error(
                "validityPeriodStart",
                "must be defined when validityPeriodEnd is",
            ));
        }
        (Some(start), Some(end)) => {
            if start < pcf.reference_period_end {
                out.push(Violation::error(
                    "validityPeriodStart",
                    "must be on or after referencePeriodEnd",
                ));
            }
            if end <= start {
                out.push(Violation::error(
                    "validityPeriodEnd",
                    "must be strictly after validityPeriodStart",
                ));
            }
            if let Some(limit) = pcf
                .reference_period_end
                .as_datetime()
                .checked_add_months(Months::new(MAX_VALIDITY_MONTHS))
            {
                if *end.as_datetime() > limit {
                    out.push(Violation::error(
                        "validityPeriodEnd",
                        "must be at most three years after referencePeriodEnd",
                    ));
                }
            }
        }
    }

    // 3. Packaging coupling.
    if !pcf.packaging_emissions_included && pcf.packaging_ghg_emissions.is_some() {
        out.push(Violation::error(
            "pcf.packagingGhgEmissions",
            "must not be defined when packagingEmissionsIncluded is false",
        ));
    }

    // 4. Data quality cutover. The primaryDataShare/dqi requirement keys
    // off the reporting period; the landManagementGhgEmissions requirement
    // keys off the injected reference time.
    let period_from_2025 = pcf.reference_period_end.epoch_secs() >= QUALITY_CUTOVER_SECS;
    if period_from_2025 {
        if pcf.primary_data_share.is_none() {
            out.push(Violation::error(
                "pcf.primaryDataShare",
                "mandatory for reporting periods including 2025 or later",
            ));
        }
        if pcf.dqi.is_none() {
            out.push(Violation::error(
                "pcf.dqi",
                "mandatory for reporting periods including 2025 or later",
            ));
        }
    } else if pcf.primary_data_share.is_none() && pcf.dqi.is_none() {
        out.push(Violation::error(
            "pcf.primaryDataShare",
            "at least one of primaryDataShare and dqi must be defined",
        ));
    }

    if now.epoch_secs() >= QUALITY_CUTOVER_SECS && pcf.land_management_ghg_emissions.is_none() {
        out.push(Violation::error(
            "pcf.landManagementGhgEmissions",
            "mandatory from 2025 onwards",
        ));
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

fn non_negative(path: &'static str, value: Decimal, out: &mut Vec<Violation>) {
    if value < Decimal::ZERO {
        out.push(Violation::error(path, "must be greater than or equal to 0"));
    }
}

fn non_negative_opt(path: &'static str, value: Option<Decimal>, out: &mut Vec<Violation>) {
    if let Some(value) = value {
        non_negative(path, value, out);
    }
}

fn percent_range(path: &'static str, value: Decimal, out: &mut Vec<Violation>) {
    if value < Decimal::ZERO || value > Decimal::from(100) {
        out.push(Violation::error(path, "must be between 0 and 100 inclusive"));
    }
}

fn is_country_code(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_subdivision_code(s: &str) -> bool {
    match s.split_once('-') {
        Some((country, suffix)) => {
            is_country_code(country)
                && (1..=3).contains(&suffix.len())
                && suffix
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        }
        None => false,
    }
}
