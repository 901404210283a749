//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers carried by a product footprint.
//! These prevent accidental identifier confusion: a footprint identifier
//! cannot be passed where a company or product URN is expected.
//!
//! ## Invariant
//!
//! A [`Urn`] always holds a string of the shape `urn:<nid>:<nss>` with a
//! valid namespace identifier. Construction from untrusted input goes
//! through [`Urn::parse`]; serde deserialization uses the same path, so a
//! decoded footprint can never hold a malformed URN.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::PcfxError;

/// Unique identifier of a product footprint (UUID).
///
/// The data model requires version-4 UUIDs; that rule is a semantic check
/// applied by the validator, so identifiers produced elsewhere still decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PfId(pub Uuid);

impl PfId {
    /// Generate a new random (version 4) footprint identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Whether the identifier is a version-4 UUID.
    pub fn is_v4(&self) -> bool {
        self.0.get_version_num() == 4
    }
}

impl Default for PfId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PfId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Uniform Resource Name identifying a company or a product.
///
/// Which URN namespaces are suitable is a matter of agreement between data
/// owner and data recipient; this type only enforces the RFC 2141 shape:
/// `urn:<nid>:<nss>` where `<nid>` is 1..=31 characters, alphanumeric or
/// hyphen, starting alphanumeric, and `<nss>` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Urn(String);

impl Urn {
    /// Parse a URN from a string, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`PcfxError::Identity`] when the scheme is not `urn`, the
    /// namespace identifier is malformed, or the namespace-specific string
    /// is empty.
    pub fn parse(s: &str) -> Result<Self, PcfxError> {
        let malformed = || PcfxError::Identity(format!("malformed URN: {s:?}"));

        let rest = s
            .get(..4)
            .filter(|scheme| scheme.eq_ignore_ascii_case("urn:"))
            .map(|_| &s[4..])
            .ok_or_else(malformed)?;

        let (nid, nss) = rest.split_once(':').ok_or_else(malformed)?;

        let nid_ok = !nid.is_empty()
            && nid.len() <= 31
            && nid.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && nid.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !nid_ok || nid.eq_ignore_ascii_case("urn") {
            return Err(malformed());
        }

        if nss.is_empty() {
            return Err(malformed());
        }

        Ok(Self(s.to_owned()))
    }

    /// The URN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Urn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Urn {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urn::parse(s)
    }
}

impl Serialize for Urn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Urn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Urn::parse(&raw).map_err(serde::de::Error::custom)
    }
}
