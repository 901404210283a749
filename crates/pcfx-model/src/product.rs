//! # Product Footprint Envelope
//!
//! The outer record of the exchange: identity, versioning, lifecycle
//! status, validity window, ownership, product identity, and exactly one
//! embedded [`CarbonFootprint`].

use serde::{Deserialize, Serialize};

use pcfx_core::{PfId, Timestamp, Urn};
use pcfx_vocab::Status;

use crate::carbon::CarbonFootprint;
use crate::extension::DataModelExtension;

/// The data model version this crate implements.
pub const SPEC_VERSION: &str = "2.0.0";

/// A product carbon footprint record as exchanged between organizations.
///
/// A footprint is never amended in place: a correction is a new record
/// with an incremented `version` and an `updated` timestamp, and a
/// superseded record is deprecated via `status`, not reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFootprint {
    /// The footprint identifier (version-4 UUID).
    pub id: PfId,

    /// The version of the product footprint data specification, `2.0.0`.
    pub spec_version: String,

    /// Identifiers of preceding footprints this record supersedes.
    /// If defined: non-empty, without duplicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preceding_pf_ids: Option<Vec<PfId>>,

    /// The version of this footprint, in `0..=2^31-1`.
    pub version: u32,

    /// Timestamp of the creation of this footprint.
    pub created: Timestamp,

    /// Timestamp of the latest update. Must not be present if the
    /// footprint has never been updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<Timestamp>,

    /// Lifecycle status.
    pub status: Status,

    /// A message explaining the reason for the current status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_comment: Option<String>,

    /// Start (inclusive) of the validity period. If a validity period is
    /// given, it must begin no earlier than the end of the reference
    /// period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_period_start: Option<Timestamp>,

    /// End (exclusive) of the validity period, at most three years after
    /// the end of the reference period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_period_end: Option<Timestamp>,

    /// Name of the footprint data owner.
    pub company_name: String,

    /// Non-empty set of URNs, each uniquely identifying the data owner.
    pub company_ids: Vec<Urn>,

    /// Free-form description of the product, including production
    /// technology or packaging where relevant.
    pub product_description: String,

    /// Non-empty set of URNs, each uniquely identifying the product.
    /// Which namespaces are suitable is a matter of agreement between
    /// data owner and data recipient.
    pub product_ids: Vec<Urn>,

    /// UN Central Product Classification code of the product.
    pub product_category_cpc: String,

    /// The trade name of the product.
    pub product_name_company: String,

    /// Additional information related to the footprint: calculation
    /// instructions, audit context, interpretation guidance.
    pub comment: String,

    /// The carbon footprint of the product.
    pub pcf: CarbonFootprint,

    /// Data model extensions. If defined: non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<DataModelExtension>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_version_constant() {
        assert_eq!(SPEC_VERSION, "2.0.0");
    }
}
