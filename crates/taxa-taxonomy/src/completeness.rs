//! Non-fatal taxonomy completeness checks.

use serde::{Deserialize, Serialize};

/// A gap found in taxonomy content. Reported, never blocks loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CompletenessWarning {
    /// Category has no keywords; it can never gain evidence or boosts.
    MissingKeywords { category_id: String },
    /// Category has no definition text.
    MissingDefinition { category_id: String },
    /// Parent link points at an id that does not exist in this version.
    UnknownParent {
        category_id: String,
        parent_category_id: String,
    },
}

/// Completeness report for one loaded taxonomy version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub taxonomy_version: String,
    pub warnings: Vec<CompletenessWarning>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}
