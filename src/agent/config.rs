//! Driver configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::search::{SearchConfig, MAX_LEVEL, MIN_LEVEL};

/// AI player configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// AI level (1-10), clamped.
    pub level: u8,

    /// Pause before starting a decision.
    pub think_delay: Duration,

    /// Pause after acting, before the next decision.
    pub settle_delay: Duration,

    /// Seed for the side-deck jitter.
    pub seed: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            level: 5,
            think_delay: Duration::from_secs(1),
            settle_delay: Duration::from_millis(500),
            seed: 42,
        }
    }
}

impl DriverConfig {
    /// Create a new config with custom level.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        self
    }

    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Zero delays, for tests and simulations.
    pub fn instant(self) -> Self {
        self.with_think_delay(Duration::ZERO).with_settle_delay(Duration::ZERO)
    }

    /// Search limits for this level.
    #[must_use]
    pub fn search(&self) -> SearchConfig {
        SearchConfig::from_level(self.level)
    }
}
