//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;

/// Default config location (~/.quick-launch/config.json)
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Load configuration from `path`.
///
/// Returns Config::default() if the file is missing, unreadable, or malformed.
/// A broken config must never keep the launcher from opening.
#[instrument(name = "load_config")]
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Failed to parse config JSON, using defaults"
            );
            Config::default()
        }
    }
}
