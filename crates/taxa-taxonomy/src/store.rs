//! TaxonomyStore: validated, immutable category set for one taxonomy version.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{info, warn};

use taxa_core::errors::{TaxaResult, TaxonomyError};
use taxa_core::models::TaxonomyCategory;

use crate::completeness::{CompletenessReport, CompletenessWarning};
use crate::schema::TaxonomyDocument;

/// Holds one loaded taxonomy version. Categories keep declared order;
/// lookups go through an id index.
#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    version: String,
    last_updated: String,
    description: String,
    categories: Vec<TaxonomyCategory>,
    index: HashMap<String, usize>,
}

impl TaxonomyStore {
    /// Build a store from a decoded taxonomy document.
    ///
    /// Fatal: duplicate or malformed category ids, empty category list.
    /// Non-fatal gaps are reported via [`TaxonomyStore::completeness`].
    pub fn from_document(doc: TaxonomyDocument) -> TaxaResult<Self> {
        if doc.categories.is_empty() {
            return Err(TaxonomyError::EmptyTaxonomy.into());
        }

        let mut categories = Vec::with_capacity(doc.categories.len());
        let mut index = HashMap::with_capacity(doc.categories.len());

        for entry in doc.categories {
            if !TaxonomyCategory::is_valid_id(&entry.category_id) {
                return Err(TaxonomyError::MalformedCategoryId {
                    id: entry.category_id,
                }
                .into());
            }
            if index.contains_key(&entry.category_id) {
                return Err(TaxonomyError::DuplicateCategoryId {
                    id: entry.category_id,
                    version: doc.version,
                }
                .into());
            }

            let category = TaxonomyCategory {
                category_id: entry.category_id.clone(),
                name: entry.name,
                definition: entry.definition,
                keywords: dedup_preserving_order(entry.keywords),
                negative_keywords: dedup_preserving_order(entry.negative_keywords),
                parent_category_id: entry.parent_category_id,
                taxonomy_version: doc.version.clone(),
            };
            index.insert(category.category_id.clone(), categories.len());
            categories.push(category);
        }

        let store = Self {
            version: doc.version,
            last_updated: doc.last_updated,
            description: doc.description,
            categories,
            index,
        };

        let report = store.completeness();
        for w in &report.warnings {
            warn!(?w, "taxonomy completeness gap");
        }
        info!(
            version = %store.version,
            categories = store.len(),
            warnings = report.warnings.len(),
            "taxonomy loaded"
        );

        Ok(store)
    }

    /// Decode and build from a JSON string.
    pub fn load_from_str(json: &str) -> TaxaResult<Self> {
        let doc: TaxonomyDocument =
            serde_json::from_str(json).map_err(|e| TaxonomyError::DecodeFailed {
                reason: e.to_string(),
            })?;
        Self::from_document(doc)
    }

    /// Decode and build from a JSON file on disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> TaxaResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::load_from_str(&json)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Lookup by category id.
    pub fn get(&self, category_id: &str) -> Option<&TaxonomyCategory> {
        self.index.get(category_id).map(|&i| &self.categories[i])
    }

    /// Iterate categories in declared (taxonomy) order.
    pub fn iter(&self) -> impl Iterator<Item = &TaxonomyCategory> {
        self.categories.iter()
    }

    /// Position of a category in taxonomy order; used for tie-breaking.
    pub fn position(&self, category_id: &str) -> Option<usize> {
        self.index.get(category_id).copied()
    }

    /// Lowercased union of every category's keywords (the encoder boost set).
    pub fn keyword_set(&self) -> HashSet<String> {
        self.categories
            .iter()
            .flat_map(|c| c.keywords.iter())
            .map(|k| k.to_lowercase())
            .collect()
    }

    /// Snapshot the store back into document form (for model artifacts).
    pub fn to_document(&self) -> TaxonomyDocument {
        TaxonomyDocument {
            version: self.version.clone(),
            last_updated: self.last_updated.clone(),
            description: self.description.clone(),
            categories: self
                .categories
                .iter()
                .map(|c| crate::schema::CategoryEntry {
                    category_id: c.category_id.clone(),
                    name: c.name.clone(),
                    definition: c.definition.clone(),
                    keywords: c.keywords.clone(),
                    negative_keywords: c.negative_keywords.clone(),
                    parent_category_id: c.parent_category_id.clone(),
                })
                .collect(),
        }
    }

    /// Run non-fatal completeness checks over the loaded categories.
    pub fn completeness(&self) -> CompletenessReport {
        let mut warnings = Vec::new();
        for c in &self.categories {
            if c.keywords.is_empty() {
                warnings.push(CompletenessWarning::MissingKeywords {
                    category_id: c.category_id.clone(),
                });
            }
            if c.definition.trim().is_empty() {
                warnings.push(CompletenessWarning::MissingDefinition {
                    category_id: c.category_id.clone(),
                });
            }
            if let Some(parent) = &c.parent_category_id {
                if !self.index.contains_key(parent) {
                    warnings.push(CompletenessWarning::UnknownParent {
                        category_id: c.category_id.clone(),
                        parent_category_id: parent.clone(),
                    });
                }
            }
        }
        CompletenessReport {
            taxonomy_version: self.version.clone(),
            warnings,
        }
    }
}

/// Drop repeated entries while keeping first-occurrence order.
fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CategoryEntry;

    fn entry(id: &str, keywords: &[&str]) -> CategoryEntry {
        CategoryEntry {
            category_id: id.to_string(),
            name: id.to_uppercase(),
            definition: format!("about {id}"),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            negative_keywords: vec![],
            parent_category_id: None,
        }
    }

    fn doc(categories: Vec<CategoryEntry>) -> TaxonomyDocument {
        TaxonomyDocument {
            version: "2024.1".to_string(),
            last_updated: "2024-05-01".to_string(),
            description: "test taxonomy".to_string(),
            categories,
        }
    }

    #[test]
    fn loads_and_indexes_categories() {
        let store = TaxonomyStore::from_document(doc(vec![
            entry("ai", &["machine learning", "neural network"]),
            entry("quantum", &["quantum", "qubit"]),
        ]))
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.version(), "2024.1");
        assert_eq!(store.get("ai").unwrap().name, "AI");
        assert_eq!(store.position("quantum"), Some(1));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn duplicate_ids_are_fatal() {
        let err = TaxonomyStore::from_document(doc(vec![entry("ai", &[]), entry("ai", &[])]))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate category id"));
    }

    #[test]
    fn malformed_ids_are_fatal() {
        let err =
            TaxonomyStore::from_document(doc(vec![entry("Not Valid", &[])])).unwrap_err();
        assert!(err.to_string().contains("malformed category id"));
    }

    #[test]
    fn empty_taxonomy_is_fatal() {
        let err = TaxonomyStore::from_document(doc(vec![])).unwrap_err();
        assert!(err.to_string().contains("no categories"));
    }

    #[test]
    fn missing_keywords_is_a_warning_not_an_error() {
        let store = TaxonomyStore::from_document(doc(vec![entry("bare", &[])])).unwrap();
        let report = store.completeness();
        assert!(!report.is_complete());
        assert!(report.warnings.iter().any(|w| matches!(
            w,
            CompletenessWarning::MissingKeywords { category_id } if category_id == "bare"
        )));
    }

    #[test]
    fn unknown_parent_is_a_warning() {
        let mut child = entry("child", &["kw"]);
        child.parent_category_id = Some("ghost".to_string());
        let store = TaxonomyStore::from_document(doc(vec![child])).unwrap();
        assert!(store.completeness().warnings.iter().any(|w| matches!(
            w,
            CompletenessWarning::UnknownParent { .. }
        )));
    }

    #[test]
    fn keyword_set_is_lowercased_union() {
        let store = TaxonomyStore::from_document(doc(vec![
            entry("ai", &["Machine Learning"]),
            entry("quantum", &["Qubit", "machine learning"]),
        ]))
        .unwrap();
        let set = store.keyword_set();
        assert!(set.contains("machine learning"));
        assert!(set.contains("qubit"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn keywords_deduped_preserving_order() {
        let store = TaxonomyStore::from_document(doc(vec![entry(
            "ai",
            &["alpha", "Beta", "alpha", "beta", "gamma"],
        )]))
        .unwrap();
        let kws = &store.get("ai").unwrap().keywords;
        assert_eq!(kws, &["alpha", "Beta", "gamma"]);
    }

    #[test]
    fn decodes_from_json_str() {
        let json = r#"{
            "version": "2024.2",
            "last_updated": "2024-06-01",
            "description": "taxonomy",
            "categories": [
                {"category_id": "ai", "name": "Artificial Intelligence",
                 "definition": "AI systems", "keywords": ["neural network"],
                 "negative_keywords": ["ai hype"]}
            ]
        }"#;
        let store = TaxonomyStore::load_from_str(json).unwrap();
        assert_eq!(store.version(), "2024.2");
        assert_eq!(store.get("ai").unwrap().negative_keywords, vec!["ai hype"]);
    }

    #[test]
    fn undecodable_json_is_a_decode_error() {
        let err = TaxonomyStore::load_from_str("{ not json").unwrap_err();
        assert!(err.to_string().contains("failed to decode"));
    }
}
