use crate::config::{defaults, Config};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Maximum depth to traverse when searching for config file relative to executable
pub const MAX_DIRECTORY_TRAVERSAL_DEPTH: usize = 5;

/// Environment variable pointing at a config file
pub const CONFIG_ENV_VAR: &str = "SCENESHEET_CONFIG";

const APP_DIR_NAME: &str = "scenesheet";
const CONFIG_FILE_NAME: &str = "config.toml";

impl Config {
    /// Loads the configuration from the first config file found, or returns
    /// the built-in defaults when there is none.
    pub fn new() -> Result<Self, ConfigError> {
        match find_config_file()? {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads and validates a specific config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to read config file {}: {}", path.display(), e),
            ))
        })?;
        Self::from_toml_str(&config_str)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// Only hard errors fail the load; warnings are left for the caller to
    /// report once logging is set up (see [`Config::validate`]).
    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }
}

/// The per-user config location, e.g. `~/.config/scenesheet/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::HomeDirError)?;
    Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Finds the configuration file using the search strategy:
/// 1. Environment variable SCENESHEET_CONFIG
/// 2. User config directory
/// 3. Relative to executable (for development/portable use)
///
/// Returns `None` when no file exists; nothing is created.
pub fn find_config_file() -> Result<Option<PathBuf>, ConfigError> {
    if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(Some(path));
        }
        return Err(ConfigError::InvalidPath(format!(
            "{} points to a missing file: {}",
            CONFIG_ENV_VAR,
            path.display()
        )));
    }

    if let Ok(user_config) = default_config_path() {
        if user_config.exists() {
            return Ok(Some(user_config));
        }
    }

    let mut dir = std::env::current_exe()?;
    dir.pop(); // Remove the executable name to get the directory

    for _ in 0..MAX_DIRECTORY_TRAVERSAL_DEPTH {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Ok(Some(config_path));
        }
        if !dir.pop() {
            break;
        }
    }

    Ok(None)
}

/// Writes the commented default config to `path`, creating parent directories.
/// Refuses to overwrite an existing file.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::InvalidPath(format!(
            "Config file already exists: {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, defaults::generate_default_config())?;
    Ok(())
}
