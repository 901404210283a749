//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error type shared across the PCF exchange stack. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Vocabulary parse failures name both the vocabulary and the rejected
//!   token, so a data producer can see exactly which closed set a value
//!   fell outside of.
//! - Temporal and identity errors carry the malformed input in the message.

use thiserror::Error;

/// Top-level error type for the PCF exchange core.
#[derive(Error, Debug)]
pub enum PcfxError {
    /// A string was not a member of a closed vocabulary.
    ///
    /// Every vocabulary in `pcfx-vocab` returns this from its `FromStr`
    /// implementation. Matching is exact: no case folding, no trimming.
    #[error("unrecognized {vocabulary} token: {token:?}")]
    UnrecognizedToken {
        /// Name of the vocabulary that rejected the token.
        vocabulary: &'static str,
        /// The token as received.
        token: String,
    },

    /// A timestamp failed to parse or violated the UTC-only policy.
    #[error("temporal error: {0}")]
    Temporal(String),

    /// An identifier (UUID, URN) failed its shape validation.
    #[error("identity error: {0}")]
    Identity(String),
}
