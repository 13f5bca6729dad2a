use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // Blue - informational
    Warning,  // Yellow - recoverable
    Error,    // Red - operation failed
    Critical, // Red, stays until dismissed
}

/// Domain-specific errors for the launcher
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Shortcut file '{}' is corrupt: {message}", path.display())]
    CorruptData { path: PathBuf, message: String },

    #[error("No shortcut named '{name}'")]
    NotFound { name: String },

    #[error("Failed to start '{name}' ({path}): {source}")]
    Spawn {
        name: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Nothing selected to {action}")]
    NoSelection { action: &'static str },

    #[error("Invalid shortcut: {0}")]
    InvalidShortcut(String),

    #[error("File error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CorruptData { .. } => ErrorSeverity::Critical,
            Self::NotFound { .. } => ErrorSeverity::Error,
            Self::Spawn { .. } => ErrorSeverity::Error,
            Self::NoSelection { .. } => ErrorSeverity::Warning,
            Self::InvalidShortcut(_) => ErrorSeverity::Warning,
            Self::Io { .. } => ErrorSeverity::Error,
        }
    }

    /// Short message for the banner. Omits paths the user already knows about.
    pub fn user_message(&self) -> String {
        match self {
            Self::CorruptData { path, .. } => format!(
                "{} could not be read. Fix or remove it; changes are disabled until then.",
                path.display()
            ),
            Self::NotFound { name } => format!("'{}' is no longer in the list", name),
            Self::Spawn { name, source, .. } => format!("Failed to launch {}: {}", name, source),
            Self::NoSelection { action } => format!("Please select an item to {}.", action),
            Self::InvalidShortcut(msg) => msg.clone(),
            Self::Io { path, source } => {
                format!("Could not access {}: {}", path.display(), source)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use quick_launch::error::ResultExt;
///
/// // Activation is best-effort
/// activator.bring_to_front(pid).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

/// Panic in debug mode, log error in release mode.
///
/// For "impossible" states that should crash during development
/// but degrade gracefully in production.
#[macro_export]
macro_rules! debug_panic {
    ( $($fmt_arg:tt)* ) => {
        if cfg!(debug_assertions) {
            panic!( $($fmt_arg)* );
        } else {
            tracing::error!("IMPOSSIBLE STATE: {}", format_args!($($fmt_arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_is_a_warning() {
        let err = LauncherError::NoSelection { action: "delete" };
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.user_message(), "Please select an item to delete.");
    }

    #[test]
    fn spawn_error_keeps_os_source() {
        let err = LauncherError::Spawn {
            name: "Editor".to_string(),
            path: "/nope/editor".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.user_message().starts_with("Failed to launch Editor"));
    }

    #[test]
    fn corrupt_data_is_critical() {
        let err = LauncherError::CorruptData {
            path: PathBuf::from("shortcuts.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("shortcuts.json"));
    }

    #[test]
    fn result_ext_returns_value_on_ok() {
        let ok: std::result::Result<u32, String> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));
        let err: std::result::Result<u32, String> = Err("boom".to_string());
        assert_eq!(err.warn_on_err(), None);
    }
}
