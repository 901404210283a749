//! # pcfx-vocab — Closed Vocabularies
//!
//! Every constrained string field of a product footprint is modeled here as
//! a sum type over its fixed token set. One definition per vocabulary, used
//! across the entire stack; adding a token forces every exhaustive `match`
//! to be updated at compile time.
//!
//! ## Parse Contract
//!
//! Each vocabulary implements the same contract:
//!
//! - `FromStr` matches the exact wire token. No case folding, no trimming,
//!   no partial matches. Failure is
//!   [`PcfxError::UnrecognizedToken`](pcfx_core::PcfxError) naming the
//!   vocabulary and the rejected token.
//! - `as_str()` returns the wire token; `parse(as_str(v)) == v` for every
//!   value. `Display` and serde use the same token, so there is no
//!   translation layer between the in-memory and wire representations.
//! - `all()` lists the members in canonical order.
//!
//! Vocabularies are never shared across fields even when token sets
//! overlap: `RuleOperator::Pef` and `BiogenicAccountingMethodology::Pef`
//! are distinct types.
//!
//! ## Crate Policy
//!
//! - Parsing is pure and total: a value or an error, never a panic.
//! - No `unsafe`, no I/O, no mutable global state.

pub mod assurance;
pub mod factor;
pub mod geography;
pub mod methodology;
pub mod operator;
pub mod status;
pub mod standard;
pub mod unit;

pub use assurance::{AssuranceBoundary, AssuranceCoverage, AssuranceLevel};
pub use factor::CharacterizationFactor;
pub use geography::{RegionOrSubregion, REGION_OR_SUBREGION_COUNT};
pub use methodology::BiogenicAccountingMethodology;
pub use operator::RuleOperator;
pub use standard::CrossSectoralStandard;
pub use status::Status;
pub use unit::DeclaredUnit;
