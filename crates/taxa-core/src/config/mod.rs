//! Strongly-typed configuration for every tunable in the engine.
//!
//! Defaulting happens at construction (via `Default` impls backed by the
//! `defaults` module), not at access sites. `TaxaConfig::validate` enforces
//! cross-field invariants and is the only place configuration can fail.

mod adjuster_config;
mod classifier_config;
pub mod defaults;
mod encoder_config;
mod evidence_config;
mod thresholds;

pub use adjuster_config::{AdjustStage, AdjusterConfig, ContextRule, ContextRulesConfig, PriorsConfig};
pub use classifier_config::{CalibrationMethod, ClassifierConfig, FeatureSelectionConfig};
pub use defaults as config_defaults;
pub use encoder_config::EncoderConfig;
pub use evidence_config::EvidenceConfig;
pub use thresholds::ThresholdConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxaConfig {
    pub encoder: EncoderConfig,
    pub classifier: ClassifierConfig,
    pub adjuster: AdjusterConfig,
    pub evidence: EvidenceConfig,
    pub thresholds: ThresholdConfig,
    /// Number of documents vectorized per batch chunk. Performance knob only.
    pub batch_size: usize,
}

impl Default for TaxaConfig {
    fn default() -> Self {
        Self {
            encoder: EncoderConfig::default(),
            classifier: ClassifierConfig::default(),
            adjuster: AdjusterConfig::default(),
            evidence: EvidenceConfig::default(),
            thresholds: ThresholdConfig::default(),
            batch_size: defaults::DEFAULT_BATCH_SIZE,
        }
    }
}

impl TaxaConfig {
    /// Validate every section. Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.encoder.validate()?;
        self.classifier.validate()?;
        self.adjuster.validate()?;
        self.thresholds.validate()?;
        if self.batch_size == 0 {
            return Err(ConfigError::NonPositiveBatchSize);
        }
        Ok(())
    }
}
