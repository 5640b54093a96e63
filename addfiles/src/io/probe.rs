//! Regular-file existence test against the base directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::core::report::Presence;

/// Resolve `entry` against `base_dir` and classify what is there.
///
/// Symlinks are followed. Directories and other non-regular files count as
/// missing. A base directory that does not exist (or is itself a file) makes
/// every entry missing.
pub fn probe(base_dir: &Path, entry: &str) -> Presence {
    let path = base_dir.join(entry);
    let presence = match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => Presence::Present,
        Ok(_) => Presence::Missing,
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            Presence::Missing
        }
        Err(err) => Presence::Unreadable {
            error: err.to_string(),
        },
    };
    debug!(path = %path.display(), status = presence.label(), "probe");
    presence
}
