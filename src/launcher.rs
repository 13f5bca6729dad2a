//! Launching shortcuts as independent OS processes.
//!
//! `Launcher::launch` resolves a name through the store and spawns its path
//! with no arguments, using the OS's own program resolution (bare names go
//! through `PATH`, full paths are used as-is). The child is never waited on.
//!
//! Foreground activation is a separate, best-effort step
//! ([`Launcher::activate`]) that the UI schedules after a short delay.

use std::process::{Command, Stdio};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::error::{LauncherError, Result};
use crate::platform::{default_activator, ForegroundActivator};
use crate::shortcuts::ShortcutStore;

/// A successfully started process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessHandle {
    /// OS process id of the child
    pub pid: u32,
    /// Shortcut name that was launched
    pub name: String,
    /// Path or command that was spawned
    pub path: String,
}

/// Starts a program and returns its pid without waiting for it.
pub trait ProcessSpawner: Send + Sync {
    fn spawn(&self, program: &str) -> std::io::Result<u32>;
}

/// Real spawner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, program: &str) -> std::io::Result<u32> {
        let program = shellexpand::tilde(program);
        let child = Command::new(program.as_ref())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        // Dropping the handle detaches the child; it outlives the launcher.
        Ok(child.id())
    }
}

pub struct Launcher {
    spawner: Arc<dyn ProcessSpawner>,
    activator: Arc<dyn ForegroundActivator>,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(default_activator())
    }
}

impl Launcher {
    pub fn new(activator: Arc<dyn ForegroundActivator>) -> Self {
        Self::with_spawner(Arc::new(SystemSpawner), activator)
    }

    pub fn with_spawner(
        spawner: Arc<dyn ProcessSpawner>,
        activator: Arc<dyn ForegroundActivator>,
    ) -> Self {
        Self { spawner, activator }
    }

    pub fn activator_name(&self) -> &'static str {
        self.activator.name()
    }

    /// Resolve `name` in `store` and start it.
    ///
    /// # Errors
    /// - `NotFound` if the store has no such name
    /// - `Spawn` wrapping the OS error if the process could not be started
    #[instrument(name = "launch", skip(self, store))]
    pub fn launch(&self, store: &ShortcutStore, name: &str) -> Result<ProcessHandle> {
        let path = store.get(name).ok_or_else(|| LauncherError::NotFound {
            name: name.to_string(),
        })?;

        info!(name = %name, path = %path, "Launching shortcut");

        let pid = self
            .spawner
            .spawn(path)
            .map_err(|source| {
                warn!(name = %name, path = %path, error = %source, "Spawn failed");
                LauncherError::Spawn {
                    name: name.to_string(),
                    path: path.to_string(),
                    source,
                }
            })?;

        info!(name = %name, pid, "Process started");
        Ok(ProcessHandle {
            pid,
            name: name.to_string(),
            path: path.to_string(),
        })
    }

    /// Best-effort foreground activation. Failures are logged and swallowed.
    pub fn activate(&self, handle: &ProcessHandle) {
        match self.activator.bring_to_front(handle.pid) {
            Ok(()) => debug!(
                pid = handle.pid,
                activator = self.activator.name(),
                "Brought launched app to front"
            ),
            Err(e) => debug!(
                pid = handle.pid,
                activator = self.activator.name(),
                error = %e,
                "Foreground activation skipped"
            ),
        }
    }
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
