//! Key-value persistence for style profiles
//!
//! The core never assumes a storage mechanism: anything that can get and set
//! strings by key can hold profiles. A failed load returns an error and leaves
//! whatever the caller currently holds untouched.

use crate::analysis::profile::StyleProfile;
use crate::io::error::{Result, StyleError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// String storage addressed by key
pub trait ProfileStore {
    /// Value stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// In-process store, mostly for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store keeping one `<key>.json` file per entry in a directory
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Store rooted at `root`; the directory is created on first write
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl ProfileStore for DirectoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StyleError::FileSystem {
                path,
                operation: "read profile",
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| StyleError::FileSystem {
            path: self.root.clone(),
            operation: "create directory",
            source: e,
        })?;
        let path = self.entry_path(key);
        std::fs::write(&path, value).map_err(|e| StyleError::FileSystem {
            path,
            operation: "write profile",
            source: e,
        })
    }
}

/// Serialize `profile` and store it under `key`
///
/// # Errors
///
/// Returns an error if encoding or the store write fails
pub fn save_profile<S: ProfileStore + ?Sized>(
    store: &mut S,
    key: &str,
    profile: &StyleProfile,
) -> Result<()> {
    store.set(key, profile.to_json()?)?;
    info!(key, profile = %profile.name, "style profile saved");
    Ok(())
}

/// Load and validate the profile stored under `key`
///
/// # Errors
///
/// Returns `MalformedProfile` if the stored text is not a valid profile, or a
/// store error if it cannot be read
pub fn load_profile<S: ProfileStore + ?Sized>(store: &S, key: &str) -> Result<Option<StyleProfile>> {
    let Some(text) = store.get(key)? else {
        return Ok(None);
    };
    let profile = StyleProfile::from_json(&text)?;
    info!(key, profile = %profile.name, "style profile loaded");
    Ok(Some(profile))
}
