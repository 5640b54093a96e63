//! Test-only helpers for building base directories and manifests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::manifest::Manifest;

/// Temporary base directory that is removed on drop.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty regular file (and its parents) relative to the base.
    pub fn touch(&self, rel: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, "").with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Create a directory (and its parents) relative to the base.
    pub fn mkdir(&self, rel: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).with_context(|| format!("create directory {}", path.display()))?;
        Ok(path)
    }
}

/// Build a manifest from string literals.
pub fn manifest(entries: &[&str]) -> Manifest {
    Manifest::new(entries.iter().map(|entry| entry.to_string()).collect())
        .expect("valid manifest")
}
