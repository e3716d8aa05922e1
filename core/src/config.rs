use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::lifecycle::DEFAULT_TICK_INTERVAL_SECS;

/// Host-side tracker configuration, stored as TOML in the platform config
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Period of the lifecycle tick, in seconds.
    pub tick_interval_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
        }
    }
}

impl TrackerConfig {
    pub fn load() -> Result<Self, CoreError> {
        Ok(confy::load("starwatch", None)?)
    }
}
