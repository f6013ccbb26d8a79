//! Key-value storage backends
//!
//! Every collection is stored as a JSON string under its own key. Storage is synchronous and is assumed to be always available:
//! backends report I/O failures in the logs, but never to their callers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A synchronous string key-value store
pub trait Storage {
    /// Returns the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: String);
}


/// A storage that only lives in memory
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys that hold a value
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}


/// A storage that keeps every key in its own file, inside a folder
#[derive(Clone, Debug, PartialEq)]
pub struct FileStorage {
    backing_folder: PathBuf,
}

impl FileStorage {
    /// Get the path to the default storage folder (`~/.config/<APP_NAME>`)
    pub fn default_folder() -> PathBuf {
        let base = match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".config"),
            None => PathBuf::from("."),
        };
        base.join(crate::config::app_name())
    }

    /// Use a given folder. It will be created on the first write if needed
    pub fn new(folder: &Path) -> Self {
        Self {
            backing_folder: PathBuf::from(folder),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.backing_folder
    }

    /// The file a key is stored into
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut filename = sanitize_filename::sanitize(key);
        if filename.is_empty() {
            filename = String::from("_");
        }
        filename.push_str(".json");
        self.backing_folder.join(filename)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("Unable to read file {:?}: {}", path, err);
                None
            },
        }
    }

    fn set(&mut self, key: &str, value: String) {
        if let Err(err) = std::fs::create_dir_all(&self.backing_folder) {
            log::warn!("Unable to create folder {:?}: {}", self.backing_folder, err);
            return;
        }

        let path = self.path_for(key);
        if let Err(err) = std::fs::write(&path, value) {
            log::warn!("Unable to save file {:?}: {}", path, err);
        }
    }
}
