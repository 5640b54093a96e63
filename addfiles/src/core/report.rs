//! Per-file check results and the aggregate run outcome.

use crate::exit_codes;

/// What the filesystem said about one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    /// Resolves to a regular file.
    Present,
    /// Nothing there, or something that is not a regular file.
    Missing,
    /// Metadata could not be read for another reason (e.g. permission denied).
    Unreadable { error: String },
}

impl Presence {
    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present)
    }

    /// Stable lowercase label used in JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Present => "present",
            Presence::Missing => "missing",
            Presence::Unreadable { .. } => "unreadable",
        }
    }
}

/// Result of checking a single manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The entry exactly as it appears in the manifest.
    pub path: String,
    pub presence: Presence,
}

impl CheckResult {
    /// Checklist line for this entry.
    pub fn render_line(&self) -> String {
        match &self.presence {
            Presence::Present => format!("  ✅ {}", self.path),
            Presence::Missing => format!("  ❌ {} - MISSING FILE", self.path),
            Presence::Unreadable { error } => {
                format!("  ⚠️  {} - UNREADABLE ({})", self.path, error)
            }
        }
    }
}

/// Aggregate result of a run. There is no partial success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    AllPresent,
    Incomplete,
}

impl RunOutcome {
    /// `AllPresent` iff every result is present (vacuously true when empty).
    pub fn from_results(results: &[CheckResult]) -> Self {
        if results.iter().all(|result| result.presence.is_present()) {
            RunOutcome::AllPresent
        } else {
            RunOutcome::Incomplete
        }
    }

    pub fn is_success(self) -> bool {
        self == RunOutcome::AllPresent
    }

    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::AllPresent => exit_codes::OK,
            RunOutcome::Incomplete => exit_codes::MISSING,
        }
    }
}
