//! Demo configuration loaded from RON

use eddy_core::{Result, TimingConfig};
use eddy_transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "EDDY_CONFIG";

/// Top-level demo configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Tick, debounce and waited-long timings
    #[serde(default)]
    pub timing: TimingConfig,
    /// Server connection
    #[serde(default)]
    pub transport: TransportConfig,
    /// Serve everything from memory instead of the server
    #[serde(default)]
    pub offline: bool,
}

impl DemoConfig {
    /// Parse and validate configuration from a RON string
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let config: DemoConfig = ron::from_str(content)?;
        config.timing.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Load from the first argument, else from `EDDY_CONFIG`, else defaults
    pub fn from_env() -> Result<Self> {
        let path = std::env::args()
            .nth(1)
            .or_else(|| std::env::var(CONFIG_ENV).ok());

        match path {
            Some(path) => {
                tracing::info!(%path, "loading configuration");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}
