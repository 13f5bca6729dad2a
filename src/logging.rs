//! Structured JSONL logging to a file plus human-readable stderr output.
//!
//! - **JSONL to file** (~/.quick-launch/logs/quick-launch.jsonl)
//! - **Compact to stderr** for whoever started the launcher from a terminal
//!
//! # Usage
//!
//! ```rust,ignore
//! use quick_launch::logging;
//!
//! // MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! tracing::info!(event_type = "app_start", "Launcher started");
//! ```

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "quick-launch.jsonl";
const DEFAULT_FILTER: &str = "info,gpui=warn,blade_graphics=warn";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// Falls back to stderr-only logging when the log file cannot be opened.
pub fn init() -> LoggingGuard {
    let log_dir = log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let log_path = log_dir.join(LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file {}: {}", log_path.display(), e);
            None
        }
    };

    let (subscriber, file_guard) = build_subscriber(env_filter, file);
    subscriber.init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Registry with the stderr layer and, when a log file is given, the JSONL layer.
fn build_subscriber(
    env_filter: EnvFilter,
    file: Option<File>,
) -> (impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>) {
    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    // Non-blocking writer so disk latency never stalls the UI thread
    let (json_layer, file_guard) = match file.map(tracing_appender::non_blocking) {
        Some((non_blocking_file, guard)) => {
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer);
    (subscriber, file_guard)
}

/// Log directory (~/.quick-launch/logs/), or a temp dir without a home
fn log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".quick-launch").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("quick-launch-logs"))
}

/// Path to the JSONL log file
pub fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_is_jsonl_inside_log_dir() {
        let path = log_path();
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
        assert_eq!(path.parent().unwrap(), log_dir());
    }

    #[test]
    fn subscriber_without_log_file_still_logs() {
        let (subscriber, guard) = build_subscriber(EnvFilter::new("info"), None);
        assert!(guard.is_none());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("stderr only");
        });
    }

    #[test]
    fn subscriber_with_log_file_writes_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let file = File::create(&path).unwrap();

        let (subscriber, guard) = build_subscriber(EnvFilter::new("info"), Some(file));
        assert!(guard.is_some());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(event_type = "test", "written to file");
        });
        drop(guard);

        let contents = fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["fields"]["message"], "written to file");
        assert_eq!(value["fields"]["event_type"], "test");
    }
}
