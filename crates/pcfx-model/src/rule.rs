//! # Product or Sector Specific Rules
//!
//! A rule set published by a PCR operator and applied during the PCF
//! calculation.

use serde::{Deserialize, Serialize};

use pcfx_vocab::RuleOperator;

/// A product or sector specific rule entry.
///
/// `other_operator_name` is mandatory when `operator` is
/// [`RuleOperator::Other`] and forbidden otherwise; the validator enforces
/// the coupling in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOrSectorSpecificRule {
    /// The operator that published the rule set.
    pub operator: RuleOperator,

    /// The non-empty set of rules applied from the operator.
    pub rule_names: Vec<String>,

    /// Name of the operator when it is not in the published vocabulary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_operator_name: Option<String>,
}
