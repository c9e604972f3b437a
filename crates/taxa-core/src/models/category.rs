use serde::{Deserialize, Serialize};

/// One category of the versioned technology taxonomy.
///
/// Immutable once loaded; created by the taxonomy store, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyCategory {
    /// Stable id: lowercase alphanumeric + underscore, unique per version.
    pub category_id: String,
    pub name: String,
    pub definition: String,
    /// Ordered, deduplicated keyword list.
    pub keywords: Vec<String>,
    /// Ordered, deduplicated negative-keyword list.
    pub negative_keywords: Vec<String>,
    pub parent_category_id: Option<String>,
    pub taxonomy_version: String,
}

impl TaxonomyCategory {
    /// Whether `id` is a well-formed category id.
    pub fn is_valid_id(id: &str) -> bool {
        !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }
}
