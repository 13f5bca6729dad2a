//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Shortcut file, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "shortcuts.json";

/// Fixed window size
pub const DEFAULT_WINDOW_WIDTH: f32 = 200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 400.0;

/// Delay before trying to bring a freshly launched app to the front
pub const DEFAULT_ACTIVATION_DELAY_MS: u64 = 1000;

/// Quick-launcher semantics: disappear when the user looks away
pub const DEFAULT_CLOSE_ON_FOCUS_LOSS: bool = true;

/// Config file location (tilde expanded at load time)
pub const DEFAULT_CONFIG_PATH: &str = "~/.quick-launch/config.json";

/// Window size bounds; values outside are clamped
pub const MIN_WINDOW_DIMENSION: f32 = 120.0;
pub const MAX_WINDOW_DIMENSION: f32 = 2000.0;
