//! Context-rule stage: keyword co-occurrence boosts.

use tracing::warn;

use taxa_core::config::{AdjustStage, ContextRule};
use taxa_core::models::ScoreRecord;

/// Add each rule's boost when all of its keywords appear in the text.
/// Matching rules are cumulative. A rule with an empty keyword set is
/// skipped, not an error. `text_lower` must already be lowercased.
pub fn apply(record: ScoreRecord, rules: &[ContextRule], text_lower: &str) -> ScoreRecord {
    let mut current = record;
    for rule in rules {
        if rule.keywords.is_empty() {
            warn!(category_id = %current.category_id, "context rule with empty keyword set; skipping");
            continue;
        }
        let all_present = rule
            .keywords
            .iter()
            .all(|kw| text_lower.contains(&kw.to_lowercase()));
        if all_present {
            let detail = format!("rule keywords: {}", rule.keywords.join(" + "));
            let new_score = current.score + rule.boost;
            current = current.adjusted(AdjustStage::ContextRules, &detail, new_score);
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(keywords: &[&str], boost: f64) -> ContextRule {
        ContextRule {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            boost,
        }
    }

    #[test]
    fn boost_requires_all_keywords() {
        let rules = vec![rule(&["quantum", "sensor"], 10.0)];
        let hit = apply(
            ScoreRecord::new("quantum", 50.0),
            &rules,
            "a quantum sensor array",
        );
        assert_eq!(hit.score, 60.0);

        let miss = apply(ScoreRecord::new("quantum", 50.0), &rules, "a quantum study");
        assert_eq!(miss.score, 50.0);
    }

    #[test]
    fn multiple_matching_rules_are_cumulative() {
        let rules = vec![rule(&["quantum"], 5.0), rule(&["sensor"], 7.0)];
        let out = apply(
            ScoreRecord::new("quantum", 40.0),
            &rules,
            "quantum sensor payload",
        );
        assert_eq!(out.score, 52.0);
        assert_eq!(out.adjustments.len(), 2);
    }

    #[test]
    fn empty_keyword_set_is_skipped_not_an_error() {
        let rules = vec![rule(&[], 50.0), rule(&["laser"], 3.0)];
        let out = apply(ScoreRecord::new("photonics", 10.0), &rules, "laser optics");
        assert_eq!(out.score, 13.0);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let rules = vec![rule(&["Machine Learning"], 8.0)];
        let out = apply(
            ScoreRecord::new("ai", 30.0),
            &rules,
            "applied machine learning methods",
        );
        assert_eq!(out.score, 38.0);
    }
}
