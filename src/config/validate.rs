// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{ConfigFile, OutputConfig, RawConfigFile, RawWatchSection};
use crate::errors::{EventgateError, Result};
use crate::fs::FileSystem;
use crate::types::WatchMode;
use crate::watch::snapshot::compile_pattern;
use crate::watch::{InterestMask, WatchSpec, WatchTarget};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::EventgateError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let spec = watch_spec_from_raw(&raw.watch)?;
        let output = OutputConfig {
            normal: raw.output.normal,
            timed_out: raw.output.timed_out,
        };
        Ok(ConfigFile::new_unchecked(spec, output))
    }
}

fn watch_spec_from_raw(watch: &RawWatchSection) -> Result<WatchSpec> {
    let mask = InterestMask {
        additions: watch.additions,
        deletions: watch.deletions,
        changes: watch.changes,
    };
    if !mask.any() {
        return Err(EventgateError::ConfigError(
            "select at least one event kind to monitor (additions, deletions or changes)"
                .to_string(),
        ));
    }

    if watch.timeout == 0 {
        return Err(EventgateError::ConfigError(
            "[watch].timeout must be >= 1 (got 0)".to_string(),
        ));
    }
    if watch.poll_interval == 0 {
        return Err(EventgateError::ConfigError(
            "[watch].poll_interval must be >= 1 (got 0)".to_string(),
        ));
    }

    let target = match watch.mode {
        WatchMode::Folder => {
            let dir = watch.dir.clone().ok_or_else(|| {
                EventgateError::ConfigError(
                    "select a folder to monitor ([watch].dir)".to_string(),
                )
            })?;
            let pattern = watch.pattern.clone().ok_or_else(|| {
                EventgateError::ConfigError(
                    "select a file specification to monitor ([watch].pattern)".to_string(),
                )
            })?;
            if pattern.is_empty() {
                return Err(EventgateError::ConfigError(
                    "[watch].pattern must not be empty".to_string(),
                ));
            }
            // Fail on a bad glob here rather than at the first poll.
            compile_pattern(&pattern)?;
            WatchTarget::Directory { dir, pattern }
        }
        WatchMode::File => {
            let path = watch.file.clone().ok_or_else(|| {
                EventgateError::ConfigError(
                    "select a file to monitor ([watch].file)".to_string(),
                )
            })?;
            WatchTarget::File { path }
        }
    };

    Ok(WatchSpec {
        target,
        mask,
        timeout: Duration::from_secs(watch.timeout),
        poll_interval: Duration::from_secs(watch.poll_interval),
    })
}

/// Check that the watched directory (or the watched file's parent) exists.
///
/// Goes through the [`FileSystem`] trait so tests can exercise it with the
/// mock filesystem. The watch loop re-checks at its first poll anyway; this
/// catches misconfiguration before any record is consumed.
pub fn validate_paths(fs: &dyn FileSystem, spec: &WatchSpec) -> Result<()> {
    let (dir, _pattern) = spec.target.dir_and_pattern()?;
    if !fs.is_dir(&dir) {
        return Err(EventgateError::ConfigError(format!(
            "watched directory {:?} doesn't exist",
            dir
        )));
    }
    Ok(())
}
