use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine project directories")]
    NoConfigDir,

    #[error("Failed to read config file: {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config to TOML")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file: {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
