//! Property tests for taxonomy loading invariants.

use proptest::prelude::*;

use taxa_taxonomy::{CategoryEntry, TaxonomyDocument, TaxonomyStore};

fn entry(id: &str) -> CategoryEntry {
    CategoryEntry {
        category_id: id.to_string(),
        name: id.to_uppercase(),
        definition: format!("about {id}"),
        keywords: vec![format!("{id} term")],
        negative_keywords: vec![],
        parent_category_id: None,
    }
}

fn doc(categories: Vec<CategoryEntry>) -> TaxonomyDocument {
    TaxonomyDocument {
        version: "2024.1".to_string(),
        last_updated: String::new(),
        description: String::new(),
        categories,
    }
}

proptest! {
    #[test]
    fn distinct_valid_ids_load_in_declared_order(
        ids in prop::collection::hash_set("[a-z][a-z0-9_]{0,7}", 1..8)
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let store =
            TaxonomyStore::from_document(doc(ids.iter().map(|i| entry(i)).collect())).unwrap();

        prop_assert_eq!(store.len(), ids.len());
        for (i, id) in ids.iter().enumerate() {
            prop_assert_eq!(store.position(id), Some(i));
            prop_assert!(store.get(id).is_some());
        }
    }

    #[test]
    fn duplicated_id_is_always_rejected(id in "[a-z][a-z0-9_]{0,7}") {
        let result = TaxonomyStore::from_document(doc(vec![entry(&id), entry(&id)]));
        prop_assert!(result.is_err());
    }

    #[test]
    fn stored_keywords_never_repeat_case_insensitively(
        kws in prop::collection::vec("[a-zA-Z]{1,6}", 0..12)
    ) {
        let mut e = entry("cat");
        e.keywords = kws;
        let store = TaxonomyStore::from_document(doc(vec![e])).unwrap();

        let lowered: Vec<String> = store
            .get("cat")
            .unwrap()
            .keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        let mut unique = lowered.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(lowered.len(), unique.len());
    }
}
