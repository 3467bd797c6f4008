//! Configuration loading
//!
//! Priority (highest to lowest):
//! 1. Environment: `QUOTESTREAM_DELAYS__SEARCH_MS=0` etc.
//! 2. Explicit config path (`--config <path>`)
//! 3. Project file: `./quotestream.toml`
//! 4. Global file: `$XDG_CONFIG_HOME/quotestream/config.toml`
//! 5. Default values

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const APP_DIR: &str = "quotestream";
const PROJECT_FILE: &str = "quotestream.toml";
const ENV_PREFIX: &str = "QUOTESTREAM_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub delays: Delays,
    pub window: WindowConfig,
}

/// UX pacing for the interaction controller, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delays {
    /// Simulated processing time between submit and results
    pub search_ms: u64,
    /// Pause between a category click and the search it triggers
    pub category_debounce_ms: u64,
    /// How long the "copied" notice stays up
    pub copied_flash_ms: u64,
}

impl Delays {
    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn category_debounce(&self) -> Duration {
        Duration::from_millis(self.category_debounce_ms)
    }

    pub fn copied_flash(&self) -> Duration {
        Duration::from_millis(self.copied_flash_ms)
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            search_ms: 600,
            category_debounce_ms: 100,
            copied_flash_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
        }
    }
}

impl Config {
    /// Load configuration from every source, see module docs for priority.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!("Merging global config {:?}", global_path);
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            tracing::debug!("Merging project config {:?}", project_path);
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        Ok(figment.extract().map_err(Box::new)?)
    }

    /// `$XDG_CONFIG_HOME/quotestream/config.toml`, or the platform equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_FILE);
        path.exists().then_some(path)
    }
}
