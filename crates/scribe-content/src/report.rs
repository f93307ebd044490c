//! Path-tagged findings and the validation run report.

use std::fmt;

/// A finding attributed to the document (or directory) it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedFinding {
    pub path: String,
    pub message: String,
}

impl fmt::Display for TaggedFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// The outcome of a validation run: every finding, in discovery order.
///
/// A pure value; translating pass/fail into a process exit code is the
/// entry point's job, which keeps the whole pipeline testable in-process.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub findings: Vec<TaggedFinding>,
}

impl ValidationReport {
    /// Whether the run passed (no findings anywhere in the tree).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}
