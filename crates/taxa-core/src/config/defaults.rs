//! Named default constants for every configurable value.

pub const DEFAULT_MAX_FEATURES: usize = 5000;
pub const DEFAULT_MIN_DF: usize = 1;
pub const DEFAULT_MAX_DF: f64 = 0.95;
pub const DEFAULT_NGRAM_MIN: usize = 1;
pub const DEFAULT_NGRAM_MAX: usize = 2;
pub const DEFAULT_KEYWORD_BOOST_FACTOR: f64 = 2.0;

pub const DEFAULT_REGULARIZATION_C: f64 = 1.0;
pub const DEFAULT_MAX_ITER: usize = 200;
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;
pub const DEFAULT_CALIBRATION_FOLDS: usize = 3;
pub const DEFAULT_K_BEST: usize = 2000;

pub const DEFAULT_NEGATIVE_KEYWORD_PENALTY: f64 = 0.7;

pub const DEFAULT_MAX_STATEMENTS: usize = 3;
pub const DEFAULT_MIN_KEYWORD_MATCHES: usize = 1;
pub const DEFAULT_EXCERPT_MAX_WORDS: usize = 50;

pub const DEFAULT_HIGH_THRESHOLD: f64 = 70.0;
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 40.0;
pub const DEFAULT_LOW_THRESHOLD: f64 = 0.0;

pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Default English stop words removed during feature encoding.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can",
    "for", "from", "had", "has", "have", "in", "into", "is", "it", "its",
    "more", "not", "of", "on", "or", "other", "our", "out", "said", "that",
    "the", "their", "they", "this", "to", "was", "we", "what", "which",
    "will", "with", "you",
];
