// Copyright (c) James Kassemi, SC, US. All rights reserved.

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_DATA_FOLDER: &str = "data";
const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "ALTDATA";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),
    #[error("data_folder must not be empty")]
    EmptyDataFolder,
}

/// Data-root configuration handed to source locators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_folder")]
    pub data_folder: PathBuf,
}

fn default_data_folder() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FOLDER)
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_folder: default_data_folder(),
        }
    }
}

impl DataConfig {
    pub fn new(data_folder: impl Into<PathBuf>) -> Self {
        Self {
            data_folder: data_folder.into(),
        }
    }

    /// Layer `config.toml` (optional) and `ALTDATA_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_layered(DEFAULT_CONFIG_FILE, Environment::with_prefix(ENV_PREFIX))
    }

    /// Env values win over the file; a missing file falls back to defaults.
    fn load_layered(file: impl AsRef<Path>, env: Environment) -> Result<Self, ConfigError> {
        let builder = base_builder()?
            .add_source(File::from(file.as_ref()).format(FileFormat::Toml).required(false))
            .add_source(env);
        finish(builder)
    }

    /// Load from an explicit toml file; environment overrides are not applied.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = base_builder()?
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(true));
        finish(builder)
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }
}

fn base_builder() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Ok(Config::builder().set_default("data_folder", DEFAULT_DATA_FOLDER)?)
}

fn finish(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<DataConfig, ConfigError> {
    let config: DataConfig = builder.build()?.try_deserialize()?;
    if config.data_folder.as_os_str().is_empty() {
        return Err(ConfigError::EmptyDataFolder);
    }
    log::debug!("data folder: {}", config.data_folder.display());
    Ok(config)
}
