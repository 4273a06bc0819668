// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventgateError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("watched directory {path:?} is unavailable: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        source: anyhow::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, EventgateError>;
