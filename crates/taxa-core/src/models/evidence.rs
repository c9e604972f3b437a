use std::fmt;

use serde::{Deserialize, Serialize};

/// Document section an evidence excerpt was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLocation {
    Abstract,
    Title,
    Keywords,
    Solicitation,
    Description,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceLocation::Abstract => "abstract",
            SourceLocation::Title => "title",
            SourceLocation::Keywords => "keywords",
            SourceLocation::Solicitation => "solicitation",
            SourceLocation::Description => "description",
        };
        write!(f, "{s}")
    }
}

/// A supporting text excerpt justifying a category assignment.
///
/// Created only by the evidence extractor, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceStatement {
    /// Excerpt of at most 50 words (plus an optional ellipsis marker).
    pub excerpt: String,
    pub source_location: SourceLocation,
    /// Which keywords matched, e.g. "Matched keywords: quantum, qubit".
    pub rationale: String,
}
