//! # Footprint Lifecycle Status
//!
//! The only state machine in the data model, with exactly two states:
//!
//! ```text
//! Active ──▶ Deprecated (terminal)
//! ```
//!
//! There is no transition back to `Active`. Re-activation means issuing a
//! new footprint with a new identifier and version, never flipping the
//! status of an existing record.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use pcfx_core::PcfxError;

/// Lifecycle status of a product footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The default status. An active footprint can be used by data
    /// recipients, e.g. for footprint calculations of their own products.
    Active,
    /// The footprint is deprecated and should no longer be used.
    Deprecated,
}

impl Status {
    /// Returns both statuses in canonical order.
    pub fn all() -> &'static [Status] {
        &[Self::Active, Self::Deprecated]
    }

    /// The exact wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Deprecated => "Deprecated",
        }
    }

    /// Whether a transition from `self` to `next` is legal.
    ///
    /// The only legal transition is `Active` to `Deprecated`. `Deprecated`
    /// is terminal, and self-transitions are not transitions.
    pub fn can_transition_to(self, next: Status) -> bool {
        matches!((self, next), (Status::Active, Status::Deprecated))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = PcfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Deprecated" => Ok(Self::Deprecated),
            other => Err(PcfxError::UnrecognizedToken {
                vocabulary: "Status",
                token: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_roundtrip() {
        for status in Status::all() {
            let parsed: Status = status.as_str().parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("active".parse::<Status>().is_err());
        assert!("Retired".parse::<Status>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for status in Status::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_only_active_to_deprecated_is_legal() {
        assert!(Status::Active.can_transition_to(Status::Deprecated));
        assert!(!Status::Deprecated.can_transition_to(Status::Active));
        assert!(!Status::Active.can_transition_to(Status::Active));
        assert!(!Status::Deprecated.can_transition_to(Status::Deprecated));
    }
}
