use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct GreetingConfig {
    /// Falls back to the greeter's default name when unset
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UiConfig {
    pub show_hints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            greeting: GreetingConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "greeter").ok_or(ConfigError::NoConfigDir)?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("greeter.toml"))
}

fn resolve_path(config_path: Option<PathBuf>) -> Result<PathBuf> {
    match config_path {
        Some(p) => Ok(p),
        None => get_default_config_path(),
    }
}

impl Config {
    /// Load the config at `config_path` (or the default location).
    ///
    /// A missing file yields the defaults and nothing is written to disk.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = resolve_path(config_path)?;

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse { path: path.clone(), source })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Build the effective config for a run.
    ///
    /// Only an explicit `--config` path is read; the default location never
    /// affects a run, so a bare invocation always prints the stock output.
    pub fn from_cli_and_file(cli_args: &CliArgs) -> Result<Self> {
        let config = match &cli_args.config {
            Some(path) => Self::load(Some(path.clone()))?,
            None => Config::default(),
        };

        Ok(config.with_cli_overrides(cli_args))
    }

    /// Defaults plus CLI overrides, without touching any existing file.
    pub fn from_cli(cli_args: &CliArgs) -> Self {
        Config::default().with_cli_overrides(cli_args)
    }

    fn with_cli_overrides(mut self, cli_args: &CliArgs) -> Self {
        // CLI args override config file
        if let Some(name) = &cli_args.name {
            self.greeting.name = Some(name.clone());
        }
        self
    }

    /// Path `--init-config` writes to: `--config` if given, else the default location.
    pub fn path_for(cli_args: &CliArgs) -> Result<PathBuf> {
        resolve_path(cli_args.config.clone())
    }
}
