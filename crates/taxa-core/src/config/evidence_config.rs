use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SourceLocation;

/// Evidence extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Maximum number of evidence statements per classification.
    pub max_statements: usize,
    /// Minimum keyword matches for a sentence to become a candidate.
    pub min_keyword_matches: usize,
    /// Word cap per excerpt; longer excerpts are truncated with an ellipsis.
    pub excerpt_max_words: usize,
    /// Source sections scanned, in priority order.
    pub source_priority: Vec<SourceLocation>,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            max_statements: defaults::DEFAULT_MAX_STATEMENTS,
            min_keyword_matches: defaults::DEFAULT_MIN_KEYWORD_MATCHES,
            excerpt_max_words: defaults::DEFAULT_EXCERPT_MAX_WORDS,
            source_priority: vec![
                SourceLocation::Abstract,
                SourceLocation::Keywords,
                SourceLocation::Solicitation,
                SourceLocation::Title,
            ],
        }
    }
}
