//! Context-prior stage: flat bonuses tied to agency/branch context.

use std::collections::HashMap;

use taxa_core::config::AdjustStage;
use taxa_core::constants::ALL_CATEGORIES_KEY;
use taxa_core::models::{DocumentContext, ScoreRecord};

/// Add configured agency and branch bonuses for the record's category.
/// The `_all_cets` key applies to every category; branch bonuses are
/// additive with agency bonuses.
pub fn apply(
    record: ScoreRecord,
    agency_priors: &HashMap<String, HashMap<String, f64>>,
    branch_priors: &HashMap<String, HashMap<String, f64>>,
    context: &DocumentContext,
) -> ScoreRecord {
    let mut current = record;
    if let Some(agency) = &context.agency {
        current = apply_table(current, agency_priors, agency, "agency");
    }
    if let Some(branch) = &context.branch {
        current = apply_table(current, branch_priors, branch, "branch");
    }
    current
}

fn apply_table(
    record: ScoreRecord,
    table: &HashMap<String, HashMap<String, f64>>,
    value: &str,
    kind: &str,
) -> ScoreRecord {
    let Some(bonuses) = table.get(value) else {
        return record;
    };

    let mut current = record;
    if let Some(&bonus) = bonuses.get(&current.category_id) {
        let detail = format!("{kind} prior: {value}");
        let new_score = current.score + bonus;
        current = current.adjusted(AdjustStage::Priors, &detail, new_score);
    }
    if let Some(&bonus) = bonuses.get(ALL_CATEGORIES_KEY) {
        let detail = format!("{kind} prior: {value} ({ALL_CATEGORIES_KEY})");
        let new_score = current.score + bonus;
        current = current.adjusted(AdjustStage::Priors, &detail, new_score);
    }
    current
}
