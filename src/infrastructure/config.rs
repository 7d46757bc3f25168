use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    model::navigation::{NavigationModel, RouteEntry, ValidationError},
    presentation::config::keybindings,
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    /// `None` when no source sets `routes`; an explicit empty list is kept.
    #[serde(default)]
    pub routes: Option<Vec<RouteEntry>>,
}

impl Config {
    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load config files from `config_dir` (or the platform config directory)
    /// on top of the embedded defaults. A missing file is not an error.
    pub fn new(config_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = config_dir.unwrap_or_else(utils::get_config_dir);
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }

        if cfg.routes.is_none() {
            cfg.routes = default_config.routes;
        }

        Ok(cfg)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config._config_dir
    }

    pub fn navigation_model(&self) -> Result<NavigationModel, ValidationError> {
        NavigationModel::try_from(self.routes.clone().unwrap_or_default())
    }
}
