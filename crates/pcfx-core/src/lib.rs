//! # pcfx-core — Foundational Types for the PCF Exchange Data Model
//!
//! This crate is the bedrock of the PCF exchange stack. It defines the
//! type-system primitives every other crate builds on; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`PfId`] and [`Urn`] are
//!    validated newtypes. No bare strings or bare UUIDs for identifiers.
//!
//! 2. **UTC-only timestamps.** The [`Timestamp`] type accepts only
//!    RFC 3339 instants with the `Z` suffix. Offset timestamps are
//!    rejected at construction, not silently converted.
//!
//! 3. **Typed parse failures.** Every closed-vocabulary parse in the stack
//!    reports [`PcfxError::UnrecognizedToken`] with the vocabulary name and
//!    the offending token.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pcfx-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::PcfxError;
pub use identity::{PfId, Urn};
pub use temporal::Timestamp;
