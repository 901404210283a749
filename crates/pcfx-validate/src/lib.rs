//! # pcfx-validate — Semantic Validation of Product Footprints
//!
//! Everything the decode boundary in `pcfx-model` cannot express as a
//! type lives here: value ranges, conditional-mandatory couplings,
//! temporal ordering and the date-dependent data quality rules.
//!
//! ## Exhaustive, Deterministic Reports
//!
//! [`validate`] never stops at the first breach. It applies the complete
//! rule catalogue and returns every violation found, each with a dotted
//! wire-name path to the offending field, in a fixed documented order.
//! Two runs over the same record produce identical reports, so producer
//! and recipient can diff them.
//!
//! ## Injected Reference Time
//!
//! Two rules depend on dates around 2025-01-01. The reference time is a
//! parameter, never read from a wall clock inside the library, so results
//! are reproducible and the cutover is testable from both sides.
//!
//! ```
//! use pcfx_core::Timestamp;
//! use pcfx_validate::validate;
//!
//! # fn demo(pf: &pcfx_model::ProductFootprint) {
//! let report = validate(pf, Timestamp::now());
//! if !report.is_valid() {
//!     eprintln!("rejected:\n{report}");
//! }
//! # }
//! ```

mod rules;
mod violation;

pub use rules::QUALITY_CUTOVER_SECS;
pub use violation::{Severity, ValidationReport, Violation};

use pcfx_core::Timestamp;
use pcfx_model::ProductFootprint;

/// Validate a decoded product footprint against the full rule catalogue.
///
/// `now` is the reference time for the date-dependent rules. Returns the
/// complete ordered report; check [`ValidationReport::is_valid`] to decide
/// acceptance. Warnings (for example a provisional characterization
/// factor) appear in the report but do not make the record invalid.
pub fn validate(pf: &ProductFootprint, now: Timestamp) -> ValidationReport {
    let mut out = Vec::new();
    rules::envelope_checks(pf, &mut out);
    rules::payload_checks(&pf.pcf, &mut out);
    rules::cross_field_checks(pf, now, &mut out);
    ValidationReport::new(out)
}
