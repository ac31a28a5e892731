//! Configuration loading
//!
//! Reads `~/.config/multipick/config.toml`. Every field has a default, so a
//! missing file or a partial file both yield a usable [`Config`].

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, InputConfig, OutputConfig, OutputFormat};

use crate::error::MultipickError;

const CONFIG_DIR: &str = "multipick";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from an explicit path. Missing or malformed files are errors.
pub fn load_config_from_path(path: &Path) -> Result<Config, MultipickError> {
    let contents = fs::read_to_string(path)?;
    parse_config_toml(&contents).map_err(|message| MultipickError::InvalidConfig {
        path: path.display().to_string(),
        message,
    })
}

/// Load the config from the default location.
///
/// A missing file yields defaults. A malformed one is logged and also yields
/// defaults, so a broken config never blocks the picker.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    match load_config_from_path(&path) {
        Ok(config) => config,
        Err(MultipickError::Io(e)) if e.kind() == ErrorKind::NotFound => Config::default(),
        Err(e) => {
            log::warn!("Ignoring config: {}", e);
            Config::default()
        }
    }
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}
