// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::config::validate::validate_paths;
use crate::errors::Result;
use crate::fs::FileSystem;

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (required fields per mode, mask, etc.). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - mode-specific required fields (dir + pattern, or file),
///   - at least one selected event kind,
///   - a compilable glob pattern and non-zero timeout/interval,
///   - an existing watched directory (checked through `filesystem`).
pub fn load_and_validate(
    path: impl AsRef<Path>,
    filesystem: &dyn FileSystem,
) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    validate_paths(filesystem, config.spec())?;
    Ok(config)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Eventgate.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `EVENTGATE_CONFIG`).
/// - Look for multiple default locations.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Eventgate.toml")
}
