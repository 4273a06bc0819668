// src/watch/mod.rs

//! Filesystem change detection.
//!
//! This module ties together:
//! - capturing a point-in-time view of a directory's matching files
//!   ([`snapshot`])
//! - classifying the difference between two such views ([`diff`])
//! - the polling loop that resolves a watch to a single outcome ([`poll`])
//!
//! The pure polling core lives in [`poll::PollState`]; the async IO shell is
//! [`poll::run_watch`].

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{EventgateError, Result};

pub mod diff;
pub mod poll;
pub mod snapshot;

pub use diff::SnapshotDiff;
pub use poll::{run_watch, PollState, PollStep};
pub use snapshot::{compile_pattern, take_snapshot, Snapshot};

/// Seconds between polls unless the configuration says otherwise.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Kind of filesystem event that resolved a watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Added,
    Removed,
    Changed,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Added => "added",
            EventKind::Removed => "removed",
            EventKind::Changed => "changed",
        };
        f.write_str(s)
    }
}

/// Which event kinds the caller wants to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestMask {
    pub additions: bool,
    pub deletions: bool,
    pub changes: bool,
}

impl InterestMask {
    /// True if at least one event kind is selected.
    pub fn any(&self) -> bool {
        self.additions || self.deletions || self.changes
    }
}

/// What to watch: a directory with a file-name glob, or a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchTarget {
    Directory { dir: PathBuf, pattern: String },
    File { path: PathBuf },
}

impl WatchTarget {
    /// Resolve to the directory to list and the file-name pattern to match.
    ///
    /// Single-file mode collapses to the containing directory plus the base
    /// name as a literal pattern (glob metacharacters in the name are
    /// escaped, so the file name matches itself and nothing else).
    pub fn dir_and_pattern(&self) -> Result<(PathBuf, String)> {
        match self {
            WatchTarget::Directory { dir, pattern } => Ok((dir.clone(), pattern.clone())),
            WatchTarget::File { path } => {
                let dir = match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => PathBuf::from("."),
                };
                let name = path.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
                    EventgateError::ConfigError(format!(
                        "watched file {:?} has no usable file name",
                        path
                    ))
                })?;
                Ok((dir, globset::escape(name)))
            }
        }
    }
}

/// Immutable description of one watch.
#[derive(Debug, Clone)]
pub struct WatchSpec {
    pub target: WatchTarget,
    pub mask: InterestMask,
    pub timeout: Duration,
    pub poll_interval: Duration,
}

/// The single resolved result of one watch.
///
/// Produced at most once per execution and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchOutcome {
    /// A selected event fired; `names` are the files involved.
    Triggered { kind: EventKind, names: Vec<String> },
    /// The timeout elapsed without any selected event.
    TimedOut,
}
