//! Core shortcut type.

use serde::{Deserialize, Serialize};

use crate::error::{LauncherError, Result};

/// A named pointer to an executable, document, or command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutEntry {
    /// Display name, unique within a store
    pub name: String,
    /// Filesystem path or bare command name
    pub path: String,
}

impl ShortcutEntry {
    /// Build a validated entry. The name is trimmed; name and path must be non-empty.
    pub fn new(name: &str, path: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LauncherError::InvalidShortcut(
                "Shortcut name must not be empty".to_string(),
            ));
        }
        if path.trim().is_empty() {
            return Err(LauncherError::InvalidShortcut(format!(
                "No application selected for '{}'",
                name
            )));
        }
        Ok(Self {
            name: name.to_string(),
            path: path.to_string(),
        })
    }
}
