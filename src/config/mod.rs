//! Configuration module - launcher settings
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - The `Config` struct
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_ACTIVATION_DELAY_MS, DEFAULT_STORE_FILE};
pub use loader::{default_config_path, load_config};
pub use types::Config;

#[cfg(test)]
pub use defaults::{
    DEFAULT_CLOSE_ON_FOCUS_LOSS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    MAX_WINDOW_DIMENSION, MIN_WINDOW_DIMENSION,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
