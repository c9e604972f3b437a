//! Property tests for evidence extraction caps.

use std::collections::HashMap;

use proptest::prelude::*;

use taxa_core::config::EvidenceConfig;
use taxa_core::models::{SourceLocation, TaxonomyCategory};
use taxa_evidence::EvidenceExtractor;

fn category() -> TaxonomyCategory {
    TaxonomyCategory {
        category_id: "quantum".into(),
        name: "Quantum".into(),
        definition: String::new(),
        keywords: vec!["quantum".into(), "qubit".into(), "sensor".into()],
        negative_keywords: vec![],
        parent_category_id: None,
        taxonomy_version: "1".into(),
    }
}

fn extract(text: String) -> Vec<taxa_core::models::EvidenceStatement> {
    let mut parts = HashMap::new();
    parts.insert(SourceLocation::Abstract, text);
    EvidenceExtractor::new(EvidenceConfig::default()).extract(&category(), &parts)
}

proptest! {
    #[test]
    fn statement_and_excerpt_caps_hold_for_any_text(
        text in "(quantum |qubit |sensor |[a-z]{1,8} ){0,120}\\.?"
    ) {
        let evidence = extract(text);
        prop_assert!(evidence.len() <= 3);
        for e in &evidence {
            prop_assert!(e.excerpt.split_whitespace().count() <= 50);
            prop_assert!(e.rationale.starts_with("Matched keywords:"));
            let listed = e
                .rationale
                .trim_start_matches("Matched keywords: ")
                .split(", ")
                .count();
            prop_assert!(listed <= 5);
        }
    }

    // The alphabet a-p cannot spell any of the category's keywords.
    #[test]
    fn text_without_keywords_yields_no_evidence(text in "[a-p .]{0,200}") {
        prop_assert!(extract(text).is_empty());
    }
}
