//! # pcfx-model — The Product Footprint Document Model
//!
//! Strongly-typed representation of a product carbon footprint record as
//! exchanged between organizations: the [`ProductFootprint`] envelope with
//! its embedded [`CarbonFootprint`] payload and the value objects they
//! compose ([`Assurance`], [`DataQualityIndicators`],
//! [`ProductOrSectorSpecificRule`], [`DataModelExtension`]).
//!
//! ## Decoding Contract
//!
//! [`decode`] turns untrusted bytes into a `ProductFootprint` or fails as a
//! whole; there is no partially-decoded record. Decode-time rejection
//! covers structure: malformed JSON, missing mandatory fields, unknown
//! vocabulary tokens, malformed decimals, malformed timestamps and URNs.
//! Semantic rules (ranges, conditional-mandatory couplings, temporal
//! windows) are the validator's job in `pcfx-validate`, which reports them
//! exhaustively rather than one at a time.
//!
//! Unknown JSON *fields* are ignored for forward compatibility; unknown
//! vocabulary *values* for known fields are decode errors.
//!
//! ## Numeric Policy
//!
//! Every quantity is a [`rust_decimal::Decimal`], serialized as a JSON
//! number through serde_json's arbitrary-precision path. Emissions values
//! are auditable quantities; they never pass through a binary float.
//!
//! ## Ownership
//!
//! A footprint exclusively owns its payload, value objects and extensions.
//! No sharing, no back-references. Records are immutable in principle:
//! an amendment is a new record with a bumped `version` and `updated`
//! timestamp, not an in-place mutation.

pub mod assurance;
pub mod carbon;
pub mod codec;
pub mod extension;
pub mod product;
pub mod quality;
pub mod rule;

pub use assurance::Assurance;
pub use carbon::CarbonFootprint;
pub use codec::{decode, decode_str, encode, encode_pretty, DecodeError};
pub use extension::DataModelExtension;
pub use product::{ProductFootprint, SPEC_VERSION};
pub use quality::DataQualityIndicators;
pub use rule::ProductOrSectorSpecificRule;
