use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Training metrics for one category's classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTrainingMetrics {
    pub category_id: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub positives: usize,
    pub negatives: usize,
    /// True when the category had no positive examples and was skipped.
    pub skipped: bool,
}

impl CategoryTrainingMetrics {
    /// Metrics record for a category skipped during training.
    pub fn skipped(category_id: &str, negatives: usize) -> Self {
        Self {
            category_id: category_id.to_string(),
            accuracy: 0.0,
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
            positives: 0,
            negatives,
            skipped: true,
        }
    }
}

/// Full training report across all taxonomy categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub trained_at: DateTime<Utc>,
    pub taxonomy_version: String,
    pub examples: usize,
    pub per_category: Vec<CategoryTrainingMetrics>,
}

impl TrainingReport {
    /// Number of categories that actually got a classifier.
    pub fn trained_count(&self) -> usize {
        self.per_category.iter().filter(|m| !m.skipped).count()
    }

    /// Number of categories skipped for lack of positive examples.
    pub fn skipped_count(&self) -> usize {
        self.per_category.iter().filter(|m| m.skipped).count()
    }
}
