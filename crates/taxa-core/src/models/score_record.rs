use serde::{Deserialize, Serialize};

use crate::config::AdjustStage;

/// One applied score adjustment, kept for auditability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjustment {
    pub stage: AdjustStage,
    /// Human-readable trigger, e.g. the matched negative keyword or rule keywords.
    pub detail: String,
    /// Signed score change this adjustment produced.
    pub delta: f64,
}

/// A category's score as it moves through the adjustment pipeline.
///
/// Each stage returns a new record rather than mutating shared state, so
/// the pipeline stays composable and testable stage-by-stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub category_id: String,
    pub score: f64,
    pub adjustments: Vec<Adjustment>,
}

impl ScoreRecord {
    pub fn new(category_id: &str, score: f64) -> Self {
        Self {
            category_id: category_id.to_string(),
            score,
            adjustments: Vec::new(),
        }
    }

    /// Return a new record with `score` replaced and the adjustment recorded.
    pub fn adjusted(&self, stage: AdjustStage, detail: &str, new_score: f64) -> Self {
        let mut adjustments = self.adjustments.clone();
        adjustments.push(Adjustment {
            stage,
            detail: detail.to_string(),
            delta: new_score - self.score,
        });
        Self {
            category_id: self.category_id.clone(),
            score: new_score,
            adjustments,
        }
    }
}
