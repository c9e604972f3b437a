/// Configuration errors. Fatal at construction/validation time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("thresholds must satisfy low < medium < high in [0,100]: low={low}, medium={medium}, high={high}")]
    ThresholdOrdering { low: f64, medium: f64, high: f64 },

    #[error("max_features must be positive, got {value}")]
    NonPositiveMaxFeatures { value: usize },

    #[error("invalid n-gram range: min={min}, max={max}")]
    InvalidNgramRange { min: usize, max: usize },

    #[error("max_df must be in (0,1], got {value}")]
    InvalidMaxDf { value: f64 },

    #[error("keyword_boost_factor must be positive, got {value}")]
    InvalidBoostFactor { value: f64 },

    #[error("negative_keyword_penalty must be in [0,1], got {value}")]
    InvalidPenaltyFactor { value: f64 },

    #[error("calibration_folds must be at least 2, got {value}")]
    InvalidFoldCount { value: usize },

    #[error("batch_size must be positive")]
    NonPositiveBatchSize,

    #[error("malformed context rule for category '{category_id}': {reason}")]
    MalformedRule { category_id: String, reason: String },
}
