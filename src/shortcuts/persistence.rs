//! Shortcut file persistence.
//!
//! Format: a single JSON object of name -> path, e.g.
//!
//! ```json
//! {
//!   "Notepad": "notepad.exe",
//!   "Calculator": "calc.exe"
//! }
//! ```
//!
//! Key order in the file is the store's order. No version field, no checksum.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, info, instrument};

use super::types::ShortcutEntry;
use crate::error::{LauncherError, Result};

/// Borrowed view used for serialization without cloning the entries
struct EntriesRef<'a>(&'a [ShortcutEntry]);

impl Serialize for EntriesRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.name, &entry.path)?;
        }
        map.end()
    }
}

/// Owned entries in file order.
///
/// Duplicate keys keep the position of their first occurrence and the value
/// of their last one.
struct OrderedEntries(Vec<ShortcutEntry>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping shortcut names to paths")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries: Vec<ShortcutEntry> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));

                while let Some((name, path)) = map.next_entry::<String, String>()? {
                    if name.is_empty() {
                        return Err(de::Error::custom("shortcut name must not be empty"));
                    }
                    match entries.iter_mut().find(|e| e.name == name) {
                        Some(existing) => existing.path = path,
                        None => entries.push(ShortcutEntry { name, path }),
                    }
                }

                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Read entries from `path`.
///
/// Returns `Ok(None)` if the file doesn't exist, `CorruptData` if it isn't a
/// JSON object of string -> string.
#[instrument(name = "shortcuts_read")]
pub fn read_entries(path: &Path) -> Result<Option<Vec<ShortcutEntry>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "Shortcut file not found, starting empty");
            return Ok(None);
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(LauncherError::CorruptData {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
        Err(source) => {
            return Err(LauncherError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let OrderedEntries(entries) =
        serde_json::from_str(&content).map_err(|e| LauncherError::CorruptData {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        path = %path.display(),
        entry_count = entries.len(),
        "Loaded shortcuts"
    );
    Ok(Some(entries))
}

/// Write entries to `path` using atomic write (write temp + rename).
///
/// Creates parent directories if needed. A failed write leaves any previous
/// file untouched.
#[instrument(name = "shortcuts_write", skip(entries), fields(entry_count = entries.len()))]
pub fn write_entries(path: &Path, entries: &[ShortcutEntry]) -> Result<()> {
    let io_err = |source: std::io::Error| LauncherError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let json = serde_json::to_string_pretty(&EntriesRef(entries))
        .map_err(|e| io_err(std::io::Error::new(ErrorKind::InvalidData, e)))?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &json).map_err(io_err)?;

    // Atomic on Unix; best-effort replace on Windows
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_err(e));
    }

    debug!(
        path = %path.display(),
        bytes = json.len(),
        "Saved shortcuts (atomic)"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(name: &str, path: &str) -> ShortcutEntry {
        ShortcutEntry {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn read_missing_file_returns_none() {
        let dir = tempdir().unwrap();
        let result = read_entries(&dir.path().join("shortcuts.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn write_then_read_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");
        let entries = vec![
            entry("Zed", "/usr/bin/zed"),
            entry("Alacritty", "alacritty"),
            entry("Mail", "/Applications/Mail.app"),
        ];

        write_entries(&path, &entries).unwrap();
        let loaded = read_entries(&path).unwrap().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn file_is_a_plain_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");
        write_entries(&path, &[entry("Notepad", "notepad.exe")]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "Notepad": "notepad.exe" }));
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");
        write_entries(&path, &[entry("Notepad", "notepad.exe")]).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("shortcuts.json");
        write_entries(&path, &[]).unwrap();
        assert_eq!(read_entries(&path).unwrap(), Some(vec![]));
    }

    #[test]
    fn read_invalid_json_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");
        fs::write(&path, "{\"Notepad\": ").unwrap();
        assert!(matches!(
            read_entries(&path),
            Err(LauncherError::CorruptData { .. })
        ));
    }

    #[test]
    fn read_wrong_shape_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");

        fs::write(&path, "[\"Notepad\"]").unwrap();
        assert!(matches!(
            read_entries(&path),
            Err(LauncherError::CorruptData { .. })
        ));

        fs::write(&path, "{\"Notepad\": 42}").unwrap();
        assert!(matches!(
            read_entries(&path),
            Err(LauncherError::CorruptData { .. })
        ));
    }

    #[test]
    fn read_empty_name_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");
        fs::write(&path, "{\"\": \"/bin/sh\"}").unwrap();
        assert!(matches!(
            read_entries(&path),
            Err(LauncherError::CorruptData { .. })
        ));
    }

    #[test]
    fn read_whitespace_name_is_kept_as_is() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");
        fs::write(&path, r#"{"Notepad": "notepad.exe", "   ": "/bin/sh"}"#).unwrap();

        let loaded = read_entries(&path).unwrap().unwrap();
        assert_eq!(
            loaded,
            vec![entry("Notepad", "notepad.exe"), entry("   ", "/bin/sh")]
        );
    }

    #[test]
    fn duplicate_keys_keep_first_position_last_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");
        fs::write(
            &path,
            r#"{"Editor": "vi", "Shell": "sh", "Editor": "nano"}"#,
        )
        .unwrap();

        let loaded = read_entries(&path).unwrap().unwrap();
        assert_eq!(loaded, vec![entry("Editor", "nano"), entry("Shell", "sh")]);
    }
}
