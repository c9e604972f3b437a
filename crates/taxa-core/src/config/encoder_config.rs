use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Feature-encoder configuration (TF-IDF with taxonomy keyword boosting).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Vocabulary cap: the highest-weighted terms are kept.
    pub max_features: usize,
    /// Minimum number of documents a term must appear in.
    pub min_df: usize,
    /// Maximum fraction of documents a term may appear in, in (0,1].
    pub max_df: f64,
    /// Smallest n-gram length (1 = unigrams).
    pub ngram_min: usize,
    /// Largest n-gram length (2 = bigrams).
    pub ngram_max: usize,
    /// Weight multiplier for vocabulary terms that match a taxonomy keyword.
    pub keyword_boost_factor: f64,
    /// Stop words removed before n-gram construction.
    pub stop_words: Vec<String>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_features: defaults::DEFAULT_MAX_FEATURES,
            min_df: defaults::DEFAULT_MIN_DF,
            max_df: defaults::DEFAULT_MAX_DF,
            ngram_min: defaults::DEFAULT_NGRAM_MIN,
            ngram_max: defaults::DEFAULT_NGRAM_MAX,
            keyword_boost_factor: defaults::DEFAULT_KEYWORD_BOOST_FACTOR,
            stop_words: defaults::DEFAULT_STOP_WORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl EncoderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_features == 0 {
            return Err(ConfigError::NonPositiveMaxFeatures {
                value: self.max_features,
            });
        }
        if self.ngram_min == 0 || self.ngram_min > self.ngram_max {
            return Err(ConfigError::InvalidNgramRange {
                min: self.ngram_min,
                max: self.ngram_max,
            });
        }
        if self.max_df <= 0.0 || self.max_df > 1.0 {
            return Err(ConfigError::InvalidMaxDf { value: self.max_df });
        }
        if self.keyword_boost_factor <= 0.0 {
            return Err(ConfigError::InvalidBoostFactor {
                value: self.keyword_boost_factor,
            });
        }
        Ok(())
    }
}
