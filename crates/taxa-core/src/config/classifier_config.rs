use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Probability calibration method for per-category classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationMethod {
    /// Platt scaling: fit a sigmoid over cross-validated decision values.
    Sigmoid,
    /// Isotonic regression (pool-adjacent-violators) over decision values.
    Isotonic,
}

/// Optional chi-squared feature selection ahead of the discriminator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSelectionConfig {
    pub enabled: bool,
    /// Number of features with the strongest label association to keep.
    pub k_best: usize,
}

impl Default for FeatureSelectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            k_best: defaults::DEFAULT_K_BEST,
        }
    }
}

/// Per-category linear discriminator + calibration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Inverse L2 regularization strength (larger = weaker regularization).
    pub regularization_c: f64,
    /// Gradient-descent iteration cap.
    pub max_iter: usize,
    /// Gradient-descent step size.
    pub learning_rate: f64,
    pub calibration: CalibrationMethod,
    /// Cross-validation folds used when fitting the calibrator.
    pub calibration_folds: usize,
    pub feature_selection: FeatureSelectionConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            regularization_c: defaults::DEFAULT_REGULARIZATION_C,
            max_iter: defaults::DEFAULT_MAX_ITER,
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            calibration: CalibrationMethod::Sigmoid,
            calibration_folds: defaults::DEFAULT_CALIBRATION_FOLDS,
            feature_selection: FeatureSelectionConfig::default(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calibration_folds < 2 {
            return Err(ConfigError::InvalidFoldCount {
                value: self.calibration_folds,
            });
        }
        Ok(())
    }
}
