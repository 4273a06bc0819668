// src/watch/snapshot.rs

use std::collections::BTreeMap;
use std::path::Path;
use std::time::SystemTime;

use globset::{Glob, GlobMatcher};
use tracing::debug;

use crate::errors::{EventgateError, Result};
use crate::fs::FileSystem;

/// Point-in-time mapping of matching file names to modification timestamps.
///
/// Keys are bare file names, unique within one directory listing. A new
/// snapshot is captured each polling cycle; existing ones are never mutated.
pub type Snapshot = BTreeMap<String, SystemTime>;

/// Compile a file-name glob pattern (`*`, `?`, `[...]`).
///
/// Matching is case-sensitive and applies to the bare file name, not the
/// full path.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    let glob = Glob::new(pattern).map_err(|e| {
        EventgateError::ConfigError(format!("invalid glob pattern {pattern:?}: {e}"))
    })?;
    Ok(glob.compile_matcher())
}

/// Capture a snapshot of `dir`: every direct entry whose file name matches
/// `matcher`, paired with its mtime. The listing is non-recursive.
///
/// Fails with [`EventgateError::DirectoryUnavailable`] when the directory
/// cannot be listed. An entry that disappears (or becomes unreadable)
/// between listing and stat is skipped for this cycle; the next poll will
/// see the settled state.
pub fn take_snapshot(
    fs: &dyn FileSystem,
    dir: &Path,
    matcher: &GlobMatcher,
) -> Result<Snapshot> {
    let entries = fs
        .read_dir(dir)
        .map_err(|source| EventgateError::DirectoryUnavailable {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut snapshot = Snapshot::new();
    for path in entries {
        if !fs.is_file(&path) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !matcher.is_match(name) {
            continue;
        }
        match fs.modified(&path) {
            Ok(modified) => {
                snapshot.insert(name.to_string(), modified);
            }
            Err(err) => {
                debug!(?path, error = %err, "entry vanished mid-listing; skipping this cycle");
            }
        }
    }

    Ok(snapshot)
}
