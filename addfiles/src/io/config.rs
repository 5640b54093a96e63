//! Checker configuration stored in `addfiles.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::guide::XcodeGuide;
use crate::core::manifest::{Manifest, validate_entry};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "addfiles.toml";

const DEFAULT_BASE_DIR: &str = "/Users/Steph_1/Library/Mobile Documents/com~apple~CloudDocs/STEVE ROVER/APPS iOS/Cosmic Heart/Coeurcosmique";

const DEFAULT_FILES: [&str; 5] = [
    "CoeurCosmique/MoodTracker.swift",
    "CoeurCosmique/MoodTrackerView.swift",
    "CoeurCosmique/AffirmationEngine.swift",
    "CoeurCosmique/StatisticsView.swift",
    "CoeurCosmique/InsightsTabView.swift",
];

/// Checker configuration (TOML).
///
/// Missing fields fall back to the values the tool has always shipped with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AddFilesConfig {
    /// Directory every manifest entry is resolved against.
    pub base_dir: PathBuf,

    /// Files to check, relative to `base_dir`, in reporting order.
    pub files: Vec<String>,

    pub guide: XcodeGuide,
}

impl Default for AddFilesConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            files: DEFAULT_FILES.iter().map(|file| file.to_string()).collect(),
            guide: XcodeGuide::default(),
        }
    }
}

impl AddFilesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(anyhow!("base_dir must be non-empty"));
        }
        for (index, file) in self.files.iter().enumerate() {
            validate_entry(file).with_context(|| format!("files[{}] invalid", index))?;
        }
        if self.guide.group.trim().is_empty() {
            return Err(anyhow!("guide.group must be non-empty"));
        }
        if self.guide.target.trim().is_empty() {
            return Err(anyhow!("guide.target must be non-empty"));
        }
        if self.guide.follow_up.trim().is_empty() {
            return Err(anyhow!("guide.follow_up must be non-empty"));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded config.
    ///
    /// A non-empty `files` list replaces the configured manifest.
    pub fn with_overrides(mut self, base_dir: Option<PathBuf>, files: Vec<String>) -> Result<Self> {
        if let Some(base_dir) = base_dir {
            self.base_dir = base_dir;
        }
        if !files.is_empty() {
            self.files = files;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn manifest(&self) -> Result<Manifest> {
        Manifest::new(self.files.clone())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AddFilesConfig::default()`.
pub fn load_config(path: &Path) -> Result<AddFilesConfig> {
    if !path.exists() {
        let cfg = AddFilesConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AddFilesConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &AddFilesConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
