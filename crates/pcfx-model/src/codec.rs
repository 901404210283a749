//! # JSON Codec
//!
//! The decode and encode entry points consumed by transport and storage
//! collaborators. Decoding is all-or-nothing: a record that fails any
//! structural rule yields no partial [`ProductFootprint`]. Decode errors
//! are deterministic functions of the input; retrying without changing
//! the bytes cannot change the outcome.

use thiserror::Error;

use crate::product::ProductFootprint;

/// Error decoding a product footprint document.
///
/// Covers malformed JSON, wrong document shape, missing mandatory fields,
/// unrecognized vocabulary tokens, malformed decimals, timestamps and
/// URNs. The underlying serde error carries the field path context.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The byte payload was not a well-formed footprint document.
    #[error("malformed product footprint document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a product footprint from JSON bytes.
///
/// Unknown fields in the document are ignored for forward compatibility;
/// unknown vocabulary values for known fields are rejected.
pub fn decode(bytes: &[u8]) -> Result<ProductFootprint, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode a product footprint from a JSON string.
pub fn decode_str(s: &str) -> Result<ProductFootprint, DecodeError> {
    Ok(serde_json::from_str(s)?)
}

/// Encode a product footprint as compact JSON bytes.
///
/// Optional fields that are absent are omitted entirely (never `null`),
/// decimals are emitted as JSON numbers with their exact digits, and
/// timestamps as RFC 3339 UTC with the `Z` suffix.
pub fn encode(pf: &ProductFootprint) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(pf)
}

/// Encode a product footprint as human-readable, indented JSON.
pub fn encode_pretty(pf: &ProductFootprint) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(pf)
}
