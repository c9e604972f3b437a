//! ScoreAdjuster: folds the configured stages over each score record.

use taxa_core::config::{AdjustStage, AdjusterConfig};
use taxa_core::models::{DocumentContext, ScoreRecord, TaxonomyCategory};

use crate::{penalty, priors, rules};

/// Applies the configured adjustment stages in their pinned order, then
/// clamps the result to [0,100]. Holds no mutable state; safe to share.
#[derive(Debug, Clone)]
pub struct ScoreAdjuster {
    config: AdjusterConfig,
}

impl ScoreAdjuster {
    pub fn new(config: AdjusterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdjusterConfig {
        &self.config
    }

    /// Adjust one category's score record.
    ///
    /// `text_lower` is the lowercased document text; lowering once per
    /// document is the caller's job so batch adjustment stays cheap.
    pub fn adjust_one(
        &self,
        record: ScoreRecord,
        category: &TaxonomyCategory,
        text_lower: &str,
        context: &DocumentContext,
    ) -> ScoreRecord {
        let mut current = record;
        for stage in &self.config.stage_order {
            current = match stage {
                AdjustStage::NegativeKeywordPenalty => penalty::apply(
                    current,
                    category,
                    text_lower,
                    self.config.negative_keyword_penalty,
                ),
                AdjustStage::ContextRules => {
                    if !self.config.context_rules.enabled {
                        current
                    } else {
                        let empty = Vec::new();
                        let category_rules = self
                            .config
                            .context_rules
                            .rules
                            .get(&category.category_id)
                            .unwrap_or(&empty);
                        rules::apply(current, category_rules, text_lower)
                    }
                }
                AdjustStage::Priors => {
                    if !self.config.priors.enabled {
                        current
                    } else {
                        priors::apply(
                            current,
                            &self.config.priors.agency,
                            &self.config.priors.branch,
                            context,
                        )
                    }
                }
            };
        }

        current.score = current.score.clamp(0.0, 100.0);
        current
    }
}
