use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Score thresholds mapping numeric scores to confidence tiers.
///
/// Must satisfy `low < medium < high`, each in [0,100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            high: defaults::DEFAULT_HIGH_THRESHOLD,
            medium: defaults::DEFAULT_MEDIUM_THRESHOLD,
            low: defaults::DEFAULT_LOW_THRESHOLD,
        }
    }
}

impl ThresholdConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !(self.low < self.medium && self.medium < self.high)
            || !in_range(self.low)
            || !in_range(self.medium)
            || !in_range(self.high)
        {
            return Err(ConfigError::ThresholdOrdering {
                low: self.low,
                medium: self.medium,
                high: self.high,
            });
        }
        Ok(())
    }
}
