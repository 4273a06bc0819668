use std::path::Path;
use std::time::Duration;

use eventgate::watch::{InterestMask, WatchSpec, WatchTarget};

/// Interest mask from three flags.
pub fn mask(additions: bool, deletions: bool, changes: bool) -> InterestMask {
    InterestMask {
        additions,
        deletions,
        changes,
    }
}

/// Directory-mode watch spec.
pub fn dir_spec(
    dir: impl AsRef<Path>,
    pattern: &str,
    mask: InterestMask,
    timeout: Duration,
    poll_interval: Duration,
) -> WatchSpec {
    WatchSpec {
        target: WatchTarget::Directory {
            dir: dir.as_ref().to_path_buf(),
            pattern: pattern.to_string(),
        },
        mask,
        timeout,
        poll_interval,
    }
}

/// Single-file-mode watch spec.
pub fn file_spec(
    path: impl AsRef<Path>,
    mask: InterestMask,
    timeout: Duration,
    poll_interval: Duration,
) -> WatchSpec {
    WatchSpec {
        target: WatchTarget::File {
            path: path.as_ref().to_path_buf(),
        },
        mask,
        timeout,
        poll_interval,
    }
}
