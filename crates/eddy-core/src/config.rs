//! Timing configuration shared by ticks, debouncing and the slow-load hint

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Timing knobs, loadable from RON
///
/// ```text
/// (
///     tick_period_ms: 1000,
///     debounce_interval_ms: 1000,
///     waited_long_ms: 200,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingConfig {
    /// Period of tick subscriptions
    #[serde(default = "default_tick_period")]
    pub tick_period_ms: u64,
    /// Quiet time an edit stream needs before it is committed
    #[serde(default = "default_debounce_interval")]
    pub debounce_interval_ms: u64,
    /// Delay after which a fetch still in flight is shown as loading
    #[serde(default = "default_waited_long")]
    pub waited_long_ms: u64,
}

fn default_tick_period() -> u64 {
    1000
}

fn default_debounce_interval() -> u64 {
    1000
}

fn default_waited_long() -> u64 {
    200
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: default_tick_period(),
            debounce_interval_ms: default_debounce_interval(),
            waited_long_ms: default_waited_long(),
        }
    }
}

impl TimingConfig {
    /// Parse and validate a RON document
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let config: TimingConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Reject settings the runtime cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.tick_period_ms == 0 {
            return Err(Error::InvalidConfig(
                "tick_period_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Tick period as a duration
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Slow-load delay as a duration
    pub fn waited_long(&self) -> Duration {
        Duration::from_millis(self.waited_long_ms)
    }
}
