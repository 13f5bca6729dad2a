//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

/// Launcher settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Where shortcuts are persisted (default: ./shortcuts.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
    /// Window width in pixels (default: 200)
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    /// Window height in pixels (default: 400)
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Delay before foreground activation of a launched app (default: 1000)
    #[serde(default = "default_activation_delay_ms")]
    pub activation_delay_ms: u64,
    /// Close the launcher when its window loses focus (default: true)
    #[serde(default = "default_close_on_focus_loss")]
    pub close_on_focus_loss: bool,
}

fn default_window_width() -> f32 {
    DEFAULT_WINDOW_WIDTH
}
fn default_window_height() -> f32 {
    DEFAULT_WINDOW_HEIGHT
}
fn default_activation_delay_ms() -> u64 {
    DEFAULT_ACTIVATION_DELAY_MS
}
fn default_close_on_focus_loss() -> bool {
    DEFAULT_CLOSE_ON_FOCUS_LOSS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            activation_delay_ms: DEFAULT_ACTIVATION_DELAY_MS,
            close_on_focus_loss: DEFAULT_CLOSE_ON_FOCUS_LOSS,
        }
    }
}

impl Config {
    /// Resolved shortcut file path, tilde expanded
    pub fn store_path(&self) -> PathBuf {
        match &self.store_path {
            Some(path) => PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref()),
            None => PathBuf::from(DEFAULT_STORE_FILE),
        }
    }

    /// Window size clamped to sane bounds; non-finite values fall back to defaults
    pub fn window_size(&self) -> (f32, f32) {
        (
            clamp_dimension(self.window_width, DEFAULT_WINDOW_WIDTH),
            clamp_dimension(self.window_height, DEFAULT_WINDOW_HEIGHT),
        )
    }

    pub fn activation_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.activation_delay_ms)
    }
}

fn clamp_dimension(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION)
    } else {
        fallback
    }
}
