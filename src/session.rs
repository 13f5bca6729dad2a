//! Launcher session: the UI-independent half of the launcher window.
//!
//! Owns the shortcut store, the query, the filtered list and the selection.
//! Every user action is a method here so the whole interaction can be
//! exercised without a window.
//!
//! ```text
//! Idle --(activate)--> Launching --(spawned)--> Closed
//!   ^                      |
//!   +------(spawn error)---+
//! Idle --(cancel)--> Closed
//! ```

use tracing::{debug, info};

use crate::error::{LauncherError, Result};
use crate::filter::filter;
use crate::launcher::{Launcher, ProcessHandle};
use crate::selection::Selection;
use crate::shortcuts::ShortcutStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the filtered list
    Idle,
    /// A launch is in progress
    Launching,
    /// Terminal: a launch succeeded or the user cancelled
    Closed,
}

pub struct LauncherSession {
    store: ShortcutStore,
    query: String,
    visible: Vec<String>,
    selection: Selection,
    state: SessionState,
}

impl LauncherSession {
    pub fn new(store: ShortcutStore) -> Self {
        let visible = filter(&store, "");
        let selection = Selection::new(visible.len());
        Self {
            store,
            query: String::new(),
            visible,
            selection,
            state: SessionState::Idle,
        }
    }

    pub fn store(&self) -> &ShortcutStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible_names(&self) -> &[String] {
        &self.visible
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selection
            .index()
            .and_then(|ix| self.visible.get(ix))
            .map(String::as_str)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    // ---- query ----

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
        self.refilter();
    }

    /// Returns false when the query was already empty
    pub fn pop_char(&mut self) -> bool {
        if self.query.pop().is_some() {
            self.refilter();
            true
        } else {
            false
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        self.visible = filter(&self.store, &self.query);
        self.selection.reset(self.visible.len());
        debug!(
            query = %self.query,
            visible = self.visible.len(),
            total = self.store.len(),
            "Filter updated"
        );
    }

    // ---- navigation ----

    pub fn move_up(&mut self) -> bool {
        self.selection.move_up()
    }

    pub fn move_down(&mut self) -> bool {
        self.selection.move_down()
    }

    pub fn select(&mut self, ix: usize) -> bool {
        self.selection.select(ix)
    }

    // ---- actions ----

    /// Launch the selected shortcut.
    ///
    /// On success the session is `Closed`; on any error it stays `Idle` so the
    /// window remains open to show the problem.
    pub fn launch_selected(&mut self, launcher: &Launcher) -> Result<ProcessHandle> {
        if self.is_closed() {
            crate::debug_panic!("launch requested on a closed session");
            return Err(LauncherError::NoSelection { action: "launch" });
        }
        let name = self
            .selected_name()
            .ok_or(LauncherError::NoSelection { action: "launch" })?
            .to_string();

        self.state = SessionState::Launching;
        match launcher.launch(&self.store, &name) {
            Ok(handle) => {
                self.state = SessionState::Closed;
                Ok(handle)
            }
            Err(err) => {
                self.state = SessionState::Idle;
                Err(err)
            }
        }
    }

    /// Remove the selected shortcut and persist. Returns the removed name.
    pub fn delete_selected(&mut self) -> Result<String> {
        let name = self
            .selected_name()
            .ok_or(LauncherError::NoSelection { action: "delete" })?
            .to_string();

        if !self.store.remove(&name)? {
            // Visible list out of sync with the store
            self.refilter();
            return Err(LauncherError::NotFound { name });
        }
        self.refilter();
        Ok(name)
    }

    /// Add or overwrite a shortcut and persist.
    pub fn add_shortcut(&mut self, name: &str, path: &str) -> Result<()> {
        self.store.add(name, path)?;
        self.refilter();
        Ok(())
    }

    /// Close without launching
    pub fn cancel(&mut self) {
        if self.state != SessionState::Closed {
            info!("Launcher cancelled");
            self.state = SessionState::Closed;
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
