// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface.
///
/// The watch loop only ever lists directories and stats files, so this trait
/// is deliberately small. Production code uses [`RealFileSystem`]; tests use
/// [`mock::MockFileSystem`] to script directory contents and mtimes.
pub trait FileSystem: Send + Sync + Debug {
    fn is_file(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;

    /// Return a list of entries in a directory.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Last-modification time of a file.
    fn modified(&self, path: &Path) -> Result<SystemTime>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            let entry = entry?;
            entries.push(entry.path());
        }
        Ok(entries)
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        let metadata =
            fs::metadata(path).with_context(|| format!("reading metadata of {:?}", path))?;
        metadata
            .modified()
            .with_context(|| format!("reading mtime of {:?}", path))
    }
}
