use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ThresholdConfig;

/// Applicability score clamped to [0.0, 100.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score(f64);

impl Score {
    /// Create a new Score, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Rescale a calibrated probability in [0,1] to a score.
    pub fn from_probability(p: f64) -> Self {
        Self::new(p * 100.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

/// Discrete confidence tier derived from a score via thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// Derive the tier implied by `score` under `thresholds`.
    pub fn from_score(score: Score, thresholds: &ThresholdConfig) -> Self {
        let v = score.value();
        if v >= thresholds.high {
            Tier::High
        } else if v >= thresholds.medium {
            Tier::Medium
        } else {
            Tier::Low
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::High => write!(f, "HIGH"),
            Tier::Medium => write!(f, "MEDIUM"),
            Tier::Low => write!(f, "LOW"),
        }
    }
}
