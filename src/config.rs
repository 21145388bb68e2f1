//! Configuration file support
//!
//! Loads configuration from TOML file at ~/.config/skiphire/config.toml
//! Falls back to defaults if the file doesn't exist or can't be parsed.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::constants;
use crate::paths::config_file_path;

/// Skiphire configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the skip catalog comes from
    pub catalog: CatalogConfig,

    /// Wizard start-up behaviour
    pub wizard: WizardConfig,
}

/// Catalog source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog endpoint, queried as `{endpoint}?{location_key}`
    pub endpoint: String,

    /// Opaque location key (area + postcode query string)
    pub location_key: String,

    /// Image reference attached to items that don't carry one
    pub image_ref: Option<String>,

    /// Timeout for HTTP requests (seconds)
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_CATALOG_ENDPOINT.to_string(),
            location_key: constants::DEFAULT_LOCATION_KEY.to_string(),
            image_ref: None,
            timeout_secs: constants::HTTP_CLIENT_TIMEOUT_SECS,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Wizard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Step the wizard opens on (1 = Postcode)
    pub initial_step: u8,

    /// Catalog position to select automatically once the catalog arrives
    pub preselect_index: Option<usize>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            initial_step: constants::FIRST_STEP,
            preselect_index: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific file, or return defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
