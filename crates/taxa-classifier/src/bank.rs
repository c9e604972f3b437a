//! Per-category classifier bank.
//!
//! An explicit map from category id to a trained classifier; the
//! "skip categories without positive examples" policy is a branch over
//! map entries, not an implicit dispatch.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use taxa_core::config::ClassifierConfig;
use taxa_core::models::{CategoryTrainingMetrics, LabelTable};
use taxa_features::SparseVector;

use crate::calibration::Calibrator;
use crate::logistic::LogisticRegression;
use crate::selection::select_k_best;

/// One trained, calibrated binary classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryClassifier {
    /// Feature columns kept by chi-squared selection (ascending), or `None`
    /// when selection is disabled.
    pub selected_features: Option<Vec<usize>>,
    pub model: LogisticRegression,
    pub calibrator: Calibrator,
}

impl CategoryClassifier {
    /// Fit selection, discriminator, and calibrator for one category.
    ///
    /// Returns `None` on numerical failure (non-finite parameters); the
    /// bank treats that the same as a skipped category.
    pub fn fit(
        samples: &[SparseVector],
        labels: &[bool],
        config: &ClassifierConfig,
    ) -> Option<Self> {
        let dimension = samples.first().map(|s| s.dimension()).unwrap_or(0);

        let (selected_features, projected): (Option<Vec<usize>>, Vec<SparseVector>) =
            if config.feature_selection.enabled && dimension > config.feature_selection.k_best {
                let keep =
                    select_k_best(samples, labels, dimension, config.feature_selection.k_best);
                let projected = samples.iter().map(|s| s.project(&keep)).collect();
                (Some(keep), projected)
            } else {
                (None, samples.to_vec())
            };

        // Out-of-fold decision values for calibration. Folds are contiguous
        // and deterministic; a fold whose training split lacks both classes
        // falls back to the full-data decisions for those samples.
        let folds = config.calibration_folds.min(projected.len()).max(1);
        let full = LogisticRegression::fit(&projected, labels, config);
        if !full.is_finite() {
            return None;
        }

        let mut decisions = vec![0.0f64; projected.len()];
        if folds >= 2 {
            let fold_size = projected.len().div_ceil(folds);
            for f in 0..folds {
                let start = f * fold_size;
                let end = ((f + 1) * fold_size).min(projected.len());
                if start >= end {
                    continue;
                }

                let mut train_x = Vec::with_capacity(projected.len() - (end - start));
                let mut train_y = Vec::with_capacity(train_x.capacity());
                for (i, (x, &y)) in projected.iter().zip(labels).enumerate() {
                    if i < start || i >= end {
                        train_x.push(x.clone());
                        train_y.push(y);
                    }
                }

                let has_both = train_y.iter().any(|&y| y) && train_y.iter().any(|&y| !y);
                let fold_model = if has_both {
                    LogisticRegression::fit(&train_x, &train_y, config)
                } else {
                    full.clone()
                };
                for i in start..end {
                    decisions[i] = fold_model.decision(&projected[i]);
                }
            }
        } else {
            for (i, x) in projected.iter().enumerate() {
                decisions[i] = full.decision(x);
            }
        }

        let calibrator = match config.calibration {
            taxa_core::config::CalibrationMethod::Sigmoid => {
                Calibrator::fit_sigmoid(&decisions, labels)
            }
            taxa_core::config::CalibrationMethod::Isotonic => {
                Calibrator::fit_isotonic(&decisions, labels)
            }
        };

        Some(Self {
            selected_features,
            model: full,
            calibrator,
        })
    }

    /// Calibrated `P(category applies)` in [0,1].
    pub fn predict_probability(&self, encoded: &SparseVector) -> f64 {
        let x = match &self.selected_features {
            Some(keep) => encoded.project(keep),
            None => encoded.clone(),
        };
        self.calibrator.calibrate(self.model.decision(&x))
    }
}

/// Map of category id → trained classifier. Categories lacking positive
/// examples are absent; scoring falls back to 0 for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierBank {
    classifiers: BTreeMap<String, CategoryClassifier>,
}

impl ClassifierBank {
    /// Train one classifier per label column, independently.
    ///
    /// Categories with zero positives (or a numerical failure) are skipped
    /// with a warning; training of the remaining categories continues.
    pub fn fit(
        samples: &[SparseVector],
        labels: &LabelTable,
        config: &ClassifierConfig,
    ) -> (Self, Vec<CategoryTrainingMetrics>) {
        let results: Vec<(String, Option<CategoryClassifier>, CategoryTrainingMetrics)> = labels
            .categories()
            .par_iter()
            .map(|category_id| {
                let Some(column) = labels.column(category_id) else {
                    warn!(category_id = %category_id, "label column missing; skipping category");
                    return (
                        category_id.clone(),
                        None,
                        CategoryTrainingMetrics::skipped(category_id, 0),
                    );
                };
                let positives = column.iter().filter(|&&y| y).count();
                let negatives = column.len() - positives;

                if positives == 0 {
                    warn!(category_id = %category_id, "no positive examples; skipping category");
                    return (
                        category_id.clone(),
                        None,
                        CategoryTrainingMetrics::skipped(category_id, negatives),
                    );
                }

                match CategoryClassifier::fit(samples, &column, config) {
                    Some(clf) => {
                        let metrics =
                            training_metrics(category_id, &clf, samples, &column, positives);
                        debug!(
                            category_id = %category_id,
                            positives,
                            f1 = metrics.f1,
                            "category classifier trained"
                        );
                        (category_id.clone(), Some(clf), metrics)
                    }
                    None => {
                        warn!(
                            category_id = %category_id,
                            "discriminator fit produced non-finite parameters; skipping category"
                        );
                        (
                            category_id.clone(),
                            None,
                            CategoryTrainingMetrics::skipped(category_id, negatives),
                        )
                    }
                }
            })
            .collect();

        let mut bank = BTreeMap::new();
        let mut metrics = Vec::with_capacity(results.len());
        for (id, clf, m) in results {
            if let Some(clf) = clf {
                bank.insert(id, clf);
            }
            metrics.push(m);
        }

        (Self { classifiers: bank }, metrics)
    }

    pub fn get(&self, category_id: &str) -> Option<&CategoryClassifier> {
        self.classifiers.get(category_id)
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }

    pub fn category_ids(&self) -> impl Iterator<Item = &String> {
        self.classifiers.keys()
    }
}

/// Training-set metrics at the 0.5 probability threshold.
fn training_metrics(
    category_id: &str,
    clf: &CategoryClassifier,
    samples: &[SparseVector],
    labels: &[bool],
    positives: usize,
) -> CategoryTrainingMetrics {
    let (mut tp, mut fp, mut tn, mut fnn) = (0usize, 0usize, 0usize, 0usize);
    for (x, &y) in samples.iter().zip(labels) {
        let predicted = clf.predict_probability(x) >= 0.5;
        match (predicted, y) {
            (true, true) => tp += 1,
            (true, false) => fp += 1,
            (false, false) => tn += 1,
            (false, true) => fnn += 1,
        }
    }

    let total = (tp + fp + tn + fnn).max(1) as f64;
    let precision = if tp + fp > 0 {
        tp as f64 / (tp + fp) as f64
    } else {
        0.0
    };
    let recall = if tp + fnn > 0 {
        tp as f64 / (tp + fnn) as f64
    } else {
        0.0
    };
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    CategoryTrainingMetrics {
        category_id: category_id.to_string(),
        accuracy: (tp + tn) as f64 / total,
        precision,
        recall,
        f1,
        positives,
        negatives: labels.len() - positives,
        skipped: false,
    }
}
