//! In-memory shortcut mapping with write-through persistence.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use super::persistence::{read_entries, write_entries};
use super::types::ShortcutEntry;
use crate::error::{LauncherError, Result};

/// Ordered name -> path mapping backed by a JSON file.
///
/// Every mutation is flushed to disk before it returns. A store opened over a
/// corrupt file is *locked*: it shows no entries and refuses mutations, so the
/// unreadable file is never replaced by an empty mapping.
#[derive(Debug, Clone)]
pub struct ShortcutStore {
    /// Entries in insertion order, names unique
    entries: Vec<ShortcutEntry>,
    /// Path to the shortcut file
    file_path: PathBuf,
    /// Why mutations are refused (corrupt file message)
    lock_reason: Option<String>,
}

impl ShortcutStore {
    /// Empty store that will persist to `path`. Nothing is written until the first change.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        ShortcutStore {
            entries: Vec::new(),
            file_path: path.into(),
            lock_reason: None,
        }
    }

    /// Load the store from `path`; a missing file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = path.into();
        let entries = read_entries(&file_path)?.unwrap_or_default();
        Ok(ShortcutStore {
            entries,
            file_path,
            lock_reason: None,
        })
    }

    /// Load the store, or fall back to a locked store when the file can't be read.
    ///
    /// The error is returned alongside so the caller can show it to the user.
    pub fn load_or_lock(path: impl Into<PathBuf>) -> (Self, Option<LauncherError>) {
        let file_path = path.into();
        match Self::load(file_path.clone()) {
            Ok(store) => (store, None),
            Err(err) => {
                warn!(
                    path = %file_path.display(),
                    error = %err,
                    "Shortcut file unreadable, locking store"
                );
                let reason = err.to_string();
                (Self::locked(file_path, reason), Some(err))
            }
        }
    }

    /// A store that refuses every mutation.
    pub fn locked(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ShortcutStore {
            entries: Vec::new(),
            file_path: path.into(),
            lock_reason: Some(reason.into()),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock_reason.is_some()
    }

    pub fn lock_reason(&self) -> Option<&str> {
        self.lock_reason.as_deref()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn entries(&self) -> &[ShortcutEntry] {
        &self.entries
    }

    /// Names in store order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Path for an exact (case-sensitive) name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.path.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the whole mapping to disk.
    pub fn save(&self) -> Result<()> {
        self.ensure_writable()?;
        write_entries(&self.file_path, &self.entries)
    }

    /// Insert or overwrite `name`, then persist.
    ///
    /// The name is trimmed and matched against existing names, trimmed or not.
    /// Overwriting keeps the entry's position and its stored name. On a failed
    /// save the in-memory mapping is rolled back.
    #[instrument(name = "shortcut_add", skip(self))]
    pub fn add(&mut self, name: &str, path: &str) -> Result<()> {
        self.ensure_writable()?;
        let entry = ShortcutEntry::new(name, path)?;

        let previous = self.entries.clone();
        match self.position_for(&entry.name) {
            Some(index) => self.entries[index].path = entry.path.clone(),
            None => self.entries.push(entry.clone()),
        }

        if let Err(err) = self.save() {
            self.entries = previous;
            return Err(err);
        }

        info!(name = %entry.name, path = %entry.path, "Shortcut saved");
        Ok(())
    }

    /// Remove `name` and persist. Returns `Ok(false)` (and writes nothing)
    /// if the name wasn't present.
    #[instrument(name = "shortcut_remove", skip(self))]
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        self.ensure_writable()?;

        let Some(index) = self.entries.iter().position(|e| e.name == name) else {
            return Ok(false);
        };

        let removed = self.entries.remove(index);
        if let Err(err) = self.save() {
            self.entries.insert(index, removed);
            return Err(err);
        }

        info!(name = %name, "Shortcut removed");
        Ok(true)
    }

    /// Existing entry for a trimmed `name`. Names loaded from disk are kept
    /// verbatim, so an exact match wins over one that only matches trimmed.
    fn position_for(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name == name)
            .or_else(|| self.entries.iter().position(|e| e.name.trim() == name))
    }

    fn ensure_writable(&self) -> Result<()> {
        match &self.lock_reason {
            Some(reason) => Err(LauncherError::CorruptData {
                path: self.file_path.clone(),
                message: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}
