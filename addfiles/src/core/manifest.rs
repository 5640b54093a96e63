//! The ordered list of files a run checks.

use std::path::Path;

use anyhow::{Result, bail};

/// Ordered manifest of paths relative to the base directory.
///
/// Entries are kept exactly as given so reports echo them verbatim. Order is
/// the reporting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    /// Build a manifest, rejecting empty or absolute entries.
    ///
    /// An empty list is allowed; a run over it succeeds vacuously.
    pub fn new(entries: Vec<String>) -> Result<Self> {
        for entry in &entries {
            validate_entry(entry)?;
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check a single manifest entry.
///
/// Entries must be non-empty and relative, otherwise joining onto the base
/// directory would silently discard it.
pub fn validate_entry(entry: &str) -> Result<()> {
    if entry.trim().is_empty() {
        bail!("manifest entry must be non-empty");
    }
    if entry.starts_with('/') || Path::new(entry).is_absolute() {
        bail!("manifest entry {entry:?} must be a relative path");
    }
    Ok(())
}

/// Final segment of an entry after the last `/`.
pub fn base_name(entry: &str) -> &str {
    entry.rsplit('/').next().unwrap_or(entry)
}
