// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Convenience for building mock mtimes from whole seconds.
pub fn mtime(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(SystemTime),
    Dir(Vec<String>), // List of child names
}

/// In-memory filesystem for tests.
///
/// Clones share the same entry map, so a test can hand a clone to the code
/// under test and keep mutating the "filesystem" from the outside (add files,
/// bump mtimes, remove files) while a watch is in progress.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
    read_dir_calls: Arc<AtomicUsize>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        // Ensure root exists
        entries.insert(PathBuf::from("."), MockEntry::Dir(Vec::new()));

        Self {
            entries: Arc::new(Mutex::new(entries)),
            read_dir_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create (or overwrite) a file with the given mtime.
    pub fn add_file(&self, path: impl AsRef<Path>, modified: SystemTime) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries.lock().unwrap();
        entries.insert(path.clone(), MockEntry::File(modified));

        // Ensure parent directories exist implicitly for simplicity in this mock
        if let Some(parent) = path.parent() {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };

            self.ensure_dir_entry(&mut entries, parent);
            // Add this file to parent's children
            if let Some(MockEntry::Dir(children)) = entries.get_mut(parent) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    if !children.contains(&name.to_string()) {
                        children.push(name.to_string());
                    }
                }
            }
        }
    }

    /// Create a directory (and its ancestors).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut entries = self.entries.lock().unwrap();
        self.ensure_dir_entry(&mut entries, path.as_ref());
    }

    /// Bump an existing file's mtime.
    pub fn touch(&self, path: impl AsRef<Path>, modified: SystemTime) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(MockEntry::File(m)) = entries.get_mut(path.as_ref()) {
            *m = modified;
        }
    }

    /// Remove a file, including the entry in its parent's listing.
    pub fn remove_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut entries = self.entries.lock().unwrap();
        entries.remove(path);

        if let Some(parent) = path.parent() {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            if let Some(MockEntry::Dir(children)) = entries.get_mut(parent) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    children.retain(|c| c != name);
                }
            }
        }
    }

    /// Remove a directory and everything under it.
    pub fn remove_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|p, _| !p.starts_with(path));

        if let Some(parent) = path.parent() {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            if let Some(MockEntry::Dir(children)) = entries.get_mut(parent) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    children.retain(|c| c != name);
                }
            }
        }
    }

    /// How many times `read_dir` has been called on this filesystem.
    pub fn read_dir_calls(&self) -> usize {
        self.read_dir_calls.load(Ordering::SeqCst)
    }

    fn ensure_dir_entry(&self, entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        if !entries.contains_key(path) {
            entries.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
            if let Some(parent) = path.parent() {
                let parent = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };

                if parent != path {
                    // Avoid infinite loop at root
                    self.ensure_dir_entry(entries, parent);
                    // Add this dir to parent's children
                    if let Some(MockEntry::Dir(children)) = entries.get_mut(parent) {
                        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                            if !children.contains(&name.to_string()) {
                                children.push(name.to_string());
                            }
                        }
                    }
                }
            }
        }
    }
}

impl FileSystem for MockFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        let entries = self.entries.lock().unwrap();
        matches!(entries.get(path), Some(MockEntry::File(_)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        let entries = self.entries.lock().unwrap();
        matches!(entries.get(path), Some(MockEntry::Dir(_)))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.read_dir_calls.fetch_add(1, Ordering::SeqCst);
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::File(modified)) => Ok(*modified),
            Some(MockEntry::Dir(_)) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }
}
