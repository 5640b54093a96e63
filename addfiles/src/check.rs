//! The existence check: probe every manifest entry, report, and decide.
//!
//! Entries are checked strictly in manifest order and every entry is checked,
//! so one run shows the complete picture. Each line is written as soon as its
//! entry is probed.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::core::guide::XcodeGuide;
use crate::core::manifest::Manifest;
use crate::core::report::{CheckResult, Presence, RunOutcome};
use crate::io::probe::probe;

/// Check one entry against the base directory.
pub fn check_entry(base_dir: &Path, entry: &str) -> CheckResult {
    CheckResult {
        path: entry.to_string(),
        presence: probe(base_dir, entry),
    }
}

/// Check every entry without rendering anything.
pub fn collect_results(manifest: &Manifest, base_dir: &Path) -> Vec<CheckResult> {
    manifest
        .iter()
        .map(|entry| check_entry(base_dir, entry))
        .collect()
}

/// Run the check and write the text report to `out`.
///
/// Writes a status line, one line per entry, and on success the instruction
/// block from `guide`. Errors are only returned for failures writing to `out`.
#[instrument(skip_all, fields(entries = manifest.len(), base_dir = %base_dir.display()))]
pub fn check_all<W: Write>(
    manifest: &Manifest,
    base_dir: &Path,
    guide: &XcodeGuide,
    out: &mut W,
) -> Result<RunOutcome> {
    if manifest.is_empty() {
        warn!("manifest is empty, nothing to check");
    }

    writeln!(out, "🔍 Checking files...").context("write report")?;
    let mut results = Vec::with_capacity(manifest.len());
    for entry in manifest.iter() {
        let result = check_entry(base_dir, entry);
        writeln!(out, "{}", result.render_line()).context("write report")?;
        out.flush().context("flush report")?;
        results.push(result);
    }

    let outcome = RunOutcome::from_results(&results);
    if outcome.is_success() {
        out.write_all(guide.render(manifest).as_bytes())
            .context("write instructions")?;
        out.flush().context("flush report")?;
    } else {
        let failed = results
            .iter()
            .filter(|result| !result.presence.is_present())
            .count();
        info!(failed, "files not present, skipping instructions");
    }
    Ok(outcome)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    ok: bool,
    base_dir: String,
    results: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    path: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Run the check and write a single pretty JSON document to `out`.
#[instrument(skip_all, fields(entries = manifest.len(), base_dir = %base_dir.display()))]
pub fn check_all_json<W: Write>(
    manifest: &Manifest,
    base_dir: &Path,
    out: &mut W,
) -> Result<RunOutcome> {
    let results = collect_results(manifest, base_dir);
    let outcome = RunOutcome::from_results(&results);
    let report = JsonReport {
        ok: outcome.is_success(),
        base_dir: base_dir.display().to_string(),
        results: results
            .iter()
            .map(|result| JsonRow {
                path: &result.path,
                status: result.presence.label(),
                error: match &result.presence {
                    Presence::Unreadable { error } => Some(error.as_str()),
                    _ => None,
                },
            })
            .collect(),
    };
    let payload = serde_json::to_string_pretty(&report).context("serialize report")?;
    writeln!(out, "{payload}").context("write report")?;
    Ok(outcome)
}
