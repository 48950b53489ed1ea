//! Command-line surface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, ConfigStore};

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "counterdash",
    version,
    about = "Terminal dashboard with a counter and one remote reading"
)]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the counter title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Override the reading endpoint URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Override the JSON field holding the reading
    #[arg(long, value_name = "NAME")]
    pub field: Option<String>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Copy every flag that was given over the file config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(title) = &self.title {
            config.counter.title = title.clone();
        }
        if let Some(url) = &self.url {
            config.reading.url = url.clone();
        }
        if let Some(field) = &self.field {
            config.reading.field = field.clone();
        }
    }

    /// Load the config file, apply overrides and validate the result.
    pub fn load_store(&self) -> Result<ConfigStore, ConfigError> {
        let path = self.config_path();
        let store = ConfigStore::new(Config::load_from(&path)?, path);
        store.update(|config| self.apply(config))?;
        Ok(store)
    }
}
