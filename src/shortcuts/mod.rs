//! Named application shortcuts and their on-disk persistence.
//!
//! - `types` - `ShortcutEntry` (name -> path)
//! - `persistence` - ordered JSON object format and atomic file writes
//! - `store` - `ShortcutStore`, the in-memory mapping that saves after every change
//!
//! # Example
//!
//! ```ignore
//! use quick_launch::shortcuts::ShortcutStore;
//!
//! let mut store = ShortcutStore::load("shortcuts.json")?;
//! store.add("Editor", "/bin/nano")?; // persisted immediately
//! assert_eq!(store.get("Editor"), Some("/bin/nano"));
//! ```

mod persistence;
mod store;
mod types;


pub use persistence::{read_entries, write_entries};
pub use store::ShortcutStore;
pub use types::ShortcutEntry;
