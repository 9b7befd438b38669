use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::ClientError;

/// String key/value store with the same shape as a browser's local storage.
pub trait LocalStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove_item(&mut self, key: &str) -> Result<(), ClientError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ClientError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Storage persisted as a flat JSON object, so a session survives between
/// CLI invocations. The file is rewritten on every change.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
    recovered: bool,
}

impl FileStorage {
    /// Opens the store at `path`. A file that does not parse is treated as
    /// an empty store and replaced on the next write, so a damaged session
    /// never blocks logging in or out.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let path = path.into();
        let mut recovered = false;
        let items = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                match serde_json::from_str(&raw) {
                    Ok(items) => items,
                    Err(err) => {
                        warn!("storage at {} is unreadable ({err}), starting empty", path.display());
                        recovered = true;
                        BTreeMap::new()
                    }
                }
            }
        } else {
            BTreeMap::new()
        };
        debug!("opened storage at {} ({} keys)", path.display(), items.len());
        Ok(FileStorage {
            path,
            items,
            recovered,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Written to a sibling file first and renamed over the store, so an
    // interrupted write leaves the previous contents in place.
    fn flush(&mut self) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp = self.path.with_file_name(tmp_name);
        fs::write(&tmp, serde_json::to_string_pretty(&self.items)?)?;
        fs::rename(&tmp, &self.path)?;
        self.recovered = false;
        Ok(())
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        self.items.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ClientError> {
        if self.items.remove(key).is_some() || self.recovered {
            self.flush()?;
        }
        Ok(())
    }
}
