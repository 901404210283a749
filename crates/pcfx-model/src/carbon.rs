//! # Carbon Footprint Payload
//!
//! The emissions-and-methodology payload of a product footprint: declared
//! unit, emissions per declared unit, accounting standards, geographic and
//! temporal scope, and data quality metadata.
//!
//! Every quantity is a [`Decimal`] calculated per declared unit. Sign and
//! range constraints, and the cross-field couplings between these fields,
//! are semantic rules applied by the validator; this module only fixes the
//! shape of the data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pcfx_core::Timestamp;
use pcfx_vocab::{
    BiogenicAccountingMethodology, CharacterizationFactor, CrossSectoralStandard, DeclaredUnit,
    RegionOrSubregion,
};

use crate::assurance::Assurance;
use crate::quality::DataQualityIndicators;
use crate::rule::ProductOrSectorSpecificRule;

/// The carbon footprint of one product, per declared unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonFootprint {
    /// The unit of analysis of the product.
    pub declared_unit: DeclaredUnit,

    /// Amount of declared units contained in the product. Must be
    /// strictly greater than zero.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub unitary_product_amount: Decimal,

    /// The PCF excluding biogenic CO2 emissions, in kgCO2e per declared
    /// unit. Non-negative.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub p_cf_excluding_biogenic: Decimal,

    /// The PCF including all biogenic emissions, in kgCO2e per declared
    /// unit. May be negative.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub p_cf_including_biogenic: Option<Decimal>,

    /// Emissions from fossil fuel combustion, fugitive and process
    /// emissions, in kgCO2e per declared unit. Non-negative.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fossil_ghg_emissions: Decimal,

    /// Fossil carbon content of the product (mass of carbon), in kgC per
    /// declared unit. Non-negative.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fossil_carbon_content: Decimal,

    /// Biogenic carbon content of the product (mass of carbon), in kgC
    /// per declared unit. Non-negative.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub biogenic_carbon_content: Decimal,

    /// Emissions from recent carbon stock loss due to direct land use
    /// change, in kgCO2e per declared unit. Non-negative.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub d_luc_ghg_emissions: Option<Decimal>,

    /// Emissions and removals from land-management-related changes,
    /// including non-CO2 sources, in kgCO2e per declared unit. May be
    /// negative. Optional for now; mandatory from 2025 onwards.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub land_management_ghg_emissions: Option<Decimal>,

    /// All other biogenic emissions associated with manufacturing and
    /// transport not covered by dLUC, iLUC or land management, in kgCO2e
    /// per declared unit. Non-negative.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub other_biogenic_ghg_emissions: Option<Decimal>,

    /// Emissions from carbon stock loss induced by demand on land not
    /// owned or controlled by the company (indirect land use change),
    /// in kgCO2e per declared unit. Non-negative.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub i_luc_ghg_emissions: Option<Decimal>,

    /// Biogenic carbon contained in the product, converted to kgCO2e per
    /// declared unit. Zero or negative (it is a withdrawal).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub biogenic_carbon_withdrawal: Option<Decimal>,

    /// Emissions from aircraft engine usage for product transport, in
    /// kgCO2e per declared unit. Non-negative.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub aircraft_ghg_emissions: Option<Decimal>,

    /// The IPCC assessment report providing the GWP characterization
    /// factors used in the calculation.
    pub characterization_factors: CharacterizationFactor,

    /// The cross-sectoral standards applied for calculating or allocating
    /// GHG emissions. Non-empty set without duplicates.
    pub cross_sectoral_standards_used: Vec<CrossSectoralStandard>,

    /// Product or sector specific rules applied, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_or_sector_specific_rules: Option<Vec<ProductOrSectorSpecificRule>>,

    /// The standard followed to account for biogenic emissions and
    /// removals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biogenic_accounting_methodology: Option<BiogenicAccountingMethodology>,

    /// The processes attributable to each lifecycle stage.
    pub boundary_processes_description: String,

    /// Start (inclusive) of the time boundary the PCF is representative
    /// for: the earliest date activity data was collected from.
    pub reference_period_start: Timestamp,

    /// End (exclusive) of the time boundary the PCF is representative
    /// for: the latest date activity data was collected from.
    pub reference_period_end: Timestamp,

    /// ISO 3166-2 subdivision code scoping the footprint (e.g. `US-NY`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geography_country_subdivision: Option<String>,

    /// ISO 3166 alpha-2 country code scoping the footprint (e.g. `FR`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geography_country: Option<String>,

    /// UN region or subregion scoping the footprint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geography_region_or_subregion: Option<RegionOrSubregion>,

    /// Emission factor databases used where secondary data entered the
    /// calculation. Undefined when no secondary data was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_emission_factor_sources: Option<Vec<String>>,

    /// Percentage of emissions excluded from the PCF, between 0 and 5
    /// inclusive.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub exempted_emissions_percent: Decimal,

    /// Rationale for excluding specific emissions. May be empty when no
    /// emissions were excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exempted_emissions_description: Option<String>,

    /// Whether packaging emissions are included in the PCF values.
    pub packaging_emissions_included: bool,

    /// Emissions from product packaging, in kgCO2e per declared unit.
    /// Non-negative, and must not be defined when
    /// `packaging_emissions_included` is false.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub packaging_ghg_emissions: Option<Decimal>,

    /// Allocation rules applied and the rationale behind them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_rules_description: Option<String>,

    /// Results, key drivers and a short qualitative description of the
    /// uncertainty assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty_assessment_description: Option<String>,

    /// The share of primary data in percent, between 0 and 100.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub primary_data_share: Option<Decimal>,

    /// Data quality indicators. Optional for reporting periods ending
    /// before 2025; mandatory afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dqi: Option<DataQualityIndicators>,

    /// Third-party assurance information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assurance: Option<Assurance>,
}
