//! Negative-keyword penalty stage.

use taxa_core::config::AdjustStage;
use taxa_core::models::{ScoreRecord, TaxonomyCategory};

/// Multiply the score by `penalty_factor` when any of the category's
/// negative keywords appears in the text. `text_lower` must already be
/// lowercased. No match leaves the record untouched.
pub fn apply(
    record: ScoreRecord,
    category: &TaxonomyCategory,
    text_lower: &str,
    penalty_factor: f64,
) -> ScoreRecord {
    let matched: Vec<&str> = category
        .negative_keywords
        .iter()
        .filter(|kw| !kw.is_empty() && text_lower.contains(&kw.to_lowercase()))
        .map(|kw| kw.as_str())
        .collect();

    if matched.is_empty() {
        return record;
    }

    let new_score = record.score * penalty_factor;
    let detail = format!("negative keywords: {}", matched.join(", "));
    record.adjusted(AdjustStage::NegativeKeywordPenalty, &detail, new_score)
}
