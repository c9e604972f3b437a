use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::evidence::EvidenceStatement;
use super::score::{Score, Tier};

/// One category assignment for one document.
///
/// Produced fresh per inference call; persistence is a collaborator concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub category_id: String,
    pub category_name: String,
    pub score: Score,
    /// Must equal the tier implied by `score` under the configured thresholds.
    pub tier: Tier,
    /// Exactly one classification per document result set carries `true`.
    pub primary: bool,
    /// At most 3 supporting excerpts.
    pub evidence: Vec<EvidenceStatement>,
    pub classified_at: DateTime<Utc>,
    pub taxonomy_version: String,
}
