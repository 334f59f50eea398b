//! Configuration for the workpad service and notifications.

use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

use crate::{
    error::Result,
    service::{DEFAULT_API_PATH, DEFAULT_TIMEOUT, HttpWorkpadService},
};

/// Default url of the service the workpads are written to
pub const DEFAULT_KIBANA_URL: &str = "http://localhost:5601";

/// Where persist failures are reported
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMode {
    /// Failures are written to the log
    #[default]
    Log,
    /// Failures are dropped
    Silent,
}

/// Persisted configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base url of the service
    pub kibana_url: String,
    /// Path of the workpad api below the base url
    pub api_path: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Where persist failures are reported
    pub notifications: NotificationMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kibana_url: DEFAULT_KIBANA_URL.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            notifications: NotificationMode::default(),
        }
    }
}

impl Config {
    /// Loads the config stored at `path`. A missing file is created with
    /// defaults; a file that fails to parse is left alone and defaults are
    /// used instead.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        match std::fs::File::open(path) {
            Ok(file) => match serde_yaml::from_reader(file) {
                Ok(config) => Ok(config),
                Err(e) => {
                    log::warn!(
                        "Failed to parse config file {}, using defaults: {}",
                        path.display(),
                        e
                    );
                    Ok(Self::default())
                }
            },
            Err(_) => {
                let config = Self::default();
                config.write(path)?;
                Ok(config)
            }
        }
    }

    /// Writes the config to `path` as yaml
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let serialized = serde_yaml::to_string(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Returns the request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Builds the http workpad service described by this config
    pub fn service(&self) -> Result<HttpWorkpadService> {
        HttpWorkpadService::builder()
            .base_url(self.kibana_url.clone())
            .api_path(self.api_path.clone())
            .timeout(self.timeout())
            .build()
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
