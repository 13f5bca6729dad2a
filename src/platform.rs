//! Platform-specific foreground activation.
//!
//! Bringing a freshly launched app to the front is inherently OS-specific and
//! racy (the child's window may not exist yet), so it sits behind
//! [`ForegroundActivator`]:
//!
//! - **macOS**: `NSRunningApplication` looked up by pid, then
//!   `activateWithOptions:` (ignoring other apps)
//! - **Other platforms**: no-op
//!
//! Callers treat every failure as non-critical.

use anyhow::Result;

/// Capability to bring a process's window to the foreground.
pub trait ForegroundActivator: Send + Sync {
    /// Short identifier for logs
    fn name(&self) -> &'static str;

    /// Best-effort activation of the app owning `pid`.
    fn bring_to_front(&self, pid: u32) -> Result<()>;
}

/// Activator for platforms without an activation primitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopActivator;

impl ForegroundActivator for NoopActivator {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn bring_to_front(&self, _pid: u32) -> Result<()> {
        Ok(())
    }
}

#[cfg(target_os = "macos")]
pub use macos::MacActivator;

#[cfg(target_os = "macos")]
mod macos {
    use anyhow::{bail, Result};
    use cocoa::base::{id, nil, BOOL, NO};
    use objc::{class, msg_send, sel, sel_impl};

    use super::ForegroundActivator;

    /// NSApplicationActivateIgnoringOtherApps
    const ACTIVATE_IGNORING_OTHER_APPS: u64 = 1 << 1;

    #[derive(Debug, Default, Clone, Copy)]
    pub struct MacActivator;

    impl ForegroundActivator for MacActivator {
        fn name(&self) -> &'static str {
            "nsrunningapplication"
        }

        fn bring_to_front(&self, pid: u32) -> Result<()> {
            let pid = i32::try_from(pid)?;
            // SAFETY: plain AppKit class/instance messages; a nil result is checked
            // before it is messaged again.
            unsafe {
                let app: id = msg_send![
                    class!(NSRunningApplication),
                    runningApplicationWithProcessIdentifier: pid
                ];
                if app == nil {
                    bail!("No running application for pid {}", pid);
                }
                let activated: BOOL =
                    msg_send![app, activateWithOptions: ACTIVATE_IGNORING_OTHER_APPS];
                if activated == NO {
                    bail!("activateWithOptions refused for pid {}", pid);
                }
            }
            Ok(())
        }
    }
}

/// Activator for the current platform.
pub fn default_activator() -> std::sync::Arc<dyn ForegroundActivator> {
    #[cfg(target_os = "macos")]
    {
        std::sync::Arc::new(MacActivator)
    }
    #[cfg(not(target_os = "macos"))]
    {
        std::sync::Arc::new(NoopActivator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_activator_always_succeeds() {
        assert!(NoopActivator.bring_to_front(1).is_ok());
        assert_eq!(NoopActivator.name(), "noop");
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn default_is_noop_off_macos() {
        assert_eq!(default_activator().name(), "noop");
    }
}
