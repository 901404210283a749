//! # Violations and Reports
//!
//! The result vocabulary of validation: a single [`Violation`] with a
//! field path and severity, and the ordered [`ValidationReport`] collecting
//! every breach found in one pass.

use std::fmt;

/// How severe a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The record breaks a rule of the data model and must be rejected.
    Error,
    /// The record is acceptable but carries something a producer should
    /// review, e.g. a characterization factor newer than this build knows.
    Warning,
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Severity of the breach.
    pub severity: Severity,
    /// Dotted path to the offending field, in wire (camelCase) names,
    /// e.g. `pcf.productOrSectorSpecificRules[1].otherOperatorName`.
    pub path: String,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl Violation {
    /// An Error-severity violation.
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    /// A Warning-severity violation.
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "  {tag} at {}: {}", self.path, self.message)
    }
}

/// The ordered outcome of validating one product footprint.
///
/// Violations appear in a fixed, documented order (field-declaration
/// order, then cross-field checks), so reports for the same record are
/// identical across runs and diffable between producer and recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Wrap an ordered violation list into a report.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Whether the record satisfies the data model. Warnings do not make
    /// a record invalid.
    pub fn is_valid(&self) -> bool {
        !self
            .violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns the number of violations, warnings included.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations at all.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns only the Error-severity violations, in report order.
    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
    }

    /// Returns only the Warning-severity violations, in report order.
    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "valid");
        }
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
