//! On-disk taxonomy document format.

use serde::{Deserialize, Serialize};

/// One category as declared in the taxonomy document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub negative_keywords: Vec<String>,
    #[serde(default)]
    pub parent_category_id: Option<String>,
}

/// The full taxonomy document: version metadata + ordered categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyDocument {
    pub version: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub description: String,
    pub categories: Vec<CategoryEntry>,
}
