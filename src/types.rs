use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

/// Which kind of target the stage watches.
///
/// - `Folder`: watch a directory for entries matching a file-name glob
///   (default behaviour).
/// - `File`: watch a single file; internally this collapses to watching the
///   containing directory with the file's base name as the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchMode {
    Folder,
    File,
}

impl Default for WatchMode {
    fn default() -> Self {
        WatchMode::Folder
    }
}

impl FromStr for WatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "folder" => Ok(WatchMode::Folder),
            "file" => Ok(WatchMode::File),
            other => Err(format!(
                "invalid watch mode: {other} (expected \"folder\" or \"file\")"
            )),
        }
    }
}

/// Where a record output writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl FromStr for OutputTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("output target must not be empty".to_string()),
            "-" | "stdout" => Ok(OutputTarget::Stdout),
            "stderr" => Ok(OutputTarget::Stderr),
            path => Ok(OutputTarget::File(PathBuf::from(path))),
        }
    }
}

impl TryFrom<String> for OutputTarget {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
