//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines [`Timestamp`], a UTC-only timestamp type for every instant in a
//! product footprint: creation and update times, reference and validity
//! period bounds, assurance completion dates.
//!
//! ## Invariant
//!
//! Footprints are exchanged between organizations, so every timestamp on
//! the wire must be RFC 3339 in UTC with the `Z` suffix. Inputs with a
//! timezone offset are **rejected at construction**, even `+00:00` which is
//! semantically equivalent to `Z`. There is no silent conversion that could
//! smuggle a local-time reading into an audited record.
//!
//! Sub-second precision is preserved end to end: a footprint decoded and
//! re-encoded carries the exact instant it was produced with.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PcfxError;

/// A UTC-only timestamp.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time.
/// - [`Timestamp::from_utc()`] — from a `chrono::DateTime<Utc>`.
/// - [`Timestamp::parse()`] — from an RFC 3339 string, rejecting non-UTC
///   offsets.
///
/// Serde goes through [`Timestamp::parse()`] and [`Timestamp::to_rfc3339()`],
/// so the wire form is always `YYYY-MM-DDTHH:MM:SS[.fff]Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// **Rejects non-UTC inputs.** Only timestamps with the `Z` suffix are
    /// accepted. Timestamps with explicit offsets like `+00:00`, `+05:30`,
    /// or `-04:00` are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PcfxError::Temporal`] if:
    /// - The string is not valid RFC 3339.
    /// - The string uses a non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, PcfxError> {
        if !s.ends_with('Z') {
            return Err(PcfxError::Temporal(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| PcfxError::Temporal(format!("invalid RFC 3339 timestamp {s:?}: {e}")))?;

        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, PcfxError> {
        let dt = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| PcfxError::Temporal(format!("invalid Unix timestamp: {secs}")))?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as RFC 3339 with Z suffix (e.g., `2025-01-15T12:00:00Z`).
    ///
    /// Sub-second digits are emitted only when present, in groups of three,
    /// so a whole-second instant renders without a fractional part.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}
