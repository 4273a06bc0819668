// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::{OutputTarget, WatchMode};
use crate::watch::{WatchSpec, DEFAULT_POLL_INTERVAL};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [watch]
/// mode = "folder"
/// dir = "data/incoming"
/// pattern = "*.csv"
/// additions = true
/// timeout = 300
///
/// [output]
/// normal = "stdout"
/// timed_out = "stderr"
/// ```
///
/// Fields not required by the selected mode are optional; `[output]` can be
/// omitted entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Watch description from `[watch]`.
    pub watch: RawWatchSection,

    /// Record destinations from `[output]`.
    #[serde(default)]
    pub output: RawOutputSection,
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWatchSection {
    /// `"folder"` (default) or `"file"`.
    #[serde(default)]
    pub mode: WatchMode,

    /// Directory to monitor (folder mode).
    pub dir: Option<PathBuf>,

    /// File-name glob applied to the entries of `dir` (folder mode).
    pub pattern: Option<String>,

    /// Single file to monitor (file mode).
    pub file: Option<PathBuf>,

    /// React to files appearing.
    #[serde(default)]
    pub additions: bool,

    /// React to files disappearing.
    #[serde(default)]
    pub deletions: bool,

    /// React to modification-time changes.
    #[serde(default)]
    pub changes: bool,

    /// How long to keep polling, in seconds.
    pub timeout: u64,

    /// Seconds between polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval: u64,
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL.as_secs()
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOutputSection {
    /// Where records go when an event fired.
    #[serde(default = "default_normal_target")]
    pub normal: OutputTarget,

    /// Where records go when the watch timed out.
    #[serde(default = "default_timed_out_target")]
    pub timed_out: OutputTarget,
}

fn default_normal_target() -> OutputTarget {
    OutputTarget::Stdout
}

fn default_timed_out_target() -> OutputTarget {
    OutputTarget::Stderr
}

impl Default for RawOutputSection {
    fn default() -> Self {
        Self {
            normal: default_normal_target(),
            timed_out: default_timed_out_target(),
        }
    }
}

/// Validated configuration.
///
/// Constructed through `TryFrom<RawConfigFile>` in [`validate`](crate::config::validate);
/// holding a value of this type means the watch description was structurally
/// sound (mode-specific fields present, glob compiles, mask non-empty,
/// timings non-zero).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    spec: WatchSpec,
    output: OutputConfig,
}

/// Resolved record destinations.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub normal: OutputTarget,
    pub timed_out: OutputTarget,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(spec: WatchSpec, output: OutputConfig) -> Self {
        Self { spec, output }
    }

    pub fn spec(&self) -> &WatchSpec {
        &self.spec
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}
