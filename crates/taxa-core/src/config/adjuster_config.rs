use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// The three score-adjustment stages, in configurable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustStage {
    NegativeKeywordPenalty,
    ContextRules,
    Priors,
}

/// A context rule: if all keywords are present in the text, add the boost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextRule {
    pub keywords: Vec<String>,
    pub boost: f64,
}

/// Keyword co-occurrence rules, keyed by category id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextRulesConfig {
    pub enabled: bool,
    pub rules: HashMap<String, Vec<ContextRule>>,
}

impl Default for ContextRulesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules: HashMap::new(),
        }
    }
}

/// Flat score bonuses keyed by context value, then category id.
///
/// The special category key `_all_cets` applies the bonus to every category
/// under that context value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorsConfig {
    pub enabled: bool,
    /// agency value → (category id → bonus)
    pub agency: HashMap<String, HashMap<String, f64>>,
    /// branch value → (category id → bonus). Additive with agency bonuses.
    pub branch: HashMap<String, HashMap<String, f64>>,
}

impl Default for PriorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            agency: HashMap::new(),
            branch: HashMap::new(),
        }
    }
}

/// Score-adjustment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjusterConfig {
    /// Multiplier applied when a category's negative keyword is present.
    pub negative_keyword_penalty: f64,
    /// Stage evaluation order. Pinned here so expected outputs are a
    /// configuration concern, not a code-order accident.
    pub stage_order: Vec<AdjustStage>,
    pub context_rules: ContextRulesConfig,
    pub priors: PriorsConfig,
}

impl Default for AdjusterConfig {
    fn default() -> Self {
        Self {
            negative_keyword_penalty: defaults::DEFAULT_NEGATIVE_KEYWORD_PENALTY,
            stage_order: vec![
                AdjustStage::NegativeKeywordPenalty,
                AdjustStage::ContextRules,
                AdjustStage::Priors,
            ],
            context_rules: ContextRulesConfig::default(),
            priors: PriorsConfig::default(),
        }
    }
}

impl AdjusterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.negative_keyword_penalty) {
            return Err(ConfigError::InvalidPenaltyFactor {
                value: self.negative_keyword_penalty,
            });
        }
        for (category_id, rules) in &self.context_rules.rules {
            for rule in rules {
                if !rule.boost.is_finite() {
                    return Err(ConfigError::MalformedRule {
                        category_id: category_id.clone(),
                        reason: format!("non-finite boost {}", rule.boost),
                    });
                }
            }
        }
        Ok(())
    }
}
