use serde::de::Error;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Missing field in scene: {0}")]
    MissingField(String),

    #[error("Invalid routing range in group label '{label}'")]
    InvalidRange { label: String },

    #[error("Invalid number '{value}' at {path}")]
    InvalidNumber { path: String, value: String },

    #[error("No source known for id {id} in profile '{profile}'")]
    UnknownSource { id: u32, profile: String },

    #[error("Unknown hardware profile: {0}")]
    UnknownProfile(String),

    #[error("Failed to read scene file {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    HomeDirError,
    InvalidPath(String),
    InvalidValue(String),
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error in config: {}", e),
            ConfigError::ParseError(e) => write!(f, "Failed to parse config file: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::HomeDirError => write!(f, "Failed to get config directory"),
            ConfigError::InvalidPath(s) => write!(f, "Invalid path in config: {}", s),
            ConfigError::InvalidValue(s) => write!(f, "Invalid configuration value: {}", s),
        }
    }
}

// The global CONFIG hands out clones of its load error.
impl Clone for ConfigError {
    fn clone(&self) -> Self {
        match self {
            ConfigError::IoError(e) => {
                ConfigError::IoError(io::Error::new(e.kind(), e.to_string()))
            }
            ConfigError::ParseError(e) => {
                ConfigError::ParseError(toml::de::Error::custom(e.to_string()))
            }
            ConfigError::SerializeError(e) => ConfigError::InvalidValue(e.to_string()),
            ConfigError::HomeDirError => ConfigError::HomeDirError,
            ConfigError::InvalidPath(s) => ConfigError::InvalidPath(s.clone()),
            ConfigError::InvalidValue(s) => ConfigError::InvalidValue(s.clone()),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IoError(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::ParseError(error)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(error: toml::ser::Error) -> Self {
        ConfigError::SerializeError(error)
    }
}
