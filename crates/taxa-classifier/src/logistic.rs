//! L2-regularized logistic regression over sparse vectors.
//!
//! Full-batch gradient descent with a fixed step size and iteration cap:
//! deterministic, no random initialization, no shuffling.

use serde::{Deserialize, Serialize};

use taxa_core::config::ClassifierConfig;
use taxa_features::SparseVector;

/// Trained linear discriminator: dense coefficient array + intercept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl LogisticRegression {
    /// Fit on encoded samples and binary labels.
    ///
    /// Minimizes mean log-loss + (1 / (2 * C * n)) * ||w||^2.
    pub fn fit(samples: &[SparseVector], labels: &[bool], config: &ClassifierConfig) -> Self {
        debug_assert_eq!(samples.len(), labels.len());
        let n = samples.len().max(1) as f64;
        let dim = samples.first().map(|s| s.dimension()).unwrap_or(0);
        let lambda = 1.0 / (config.regularization_c * n);
        let lr = config.learning_rate;

        let mut w = vec![0.0f64; dim];
        let mut b = 0.0f64;

        for _ in 0..config.max_iter {
            let mut grad_w = vec![0.0f64; dim];
            let mut grad_b = 0.0f64;

            for (x, &y) in samples.iter().zip(labels) {
                let p = sigmoid(x.dot(&w) + b);
                let err = p - if y { 1.0 } else { 0.0 };
                for (i, v) in x.iter() {
                    grad_w[i] += err * v;
                }
                grad_b += err;
            }

            for i in 0..dim {
                w[i] -= lr * (grad_w[i] / n + lambda * w[i]);
            }
            b -= lr * grad_b / n;
        }

        Self {
            coefficients: w,
            intercept: b,
        }
    }

    /// Raw decision value (signed margin).
    pub fn decision(&self, x: &SparseVector) -> f64 {
        x.dot(&self.coefficients) + self.intercept
    }

    /// Uncalibrated probability from the sigmoid of the margin.
    pub fn predict_raw(&self, x: &SparseVector) -> f64 {
        sigmoid(self.decision(x))
    }

    /// True when every parameter is finite.
    pub fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.coefficients.iter().all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_of(dim: usize, entries: &[(usize, f64)]) -> SparseVector {
        SparseVector::new(dim, entries.to_vec())
    }

    fn separable() -> (Vec<SparseVector>, Vec<bool>) {
        // Feature 0 marks the positive class, feature 1 the negative.
        let samples = vec![
            vec_of(2, &[(0, 1.0)]),
            vec_of(2, &[(0, 0.9)]),
            vec_of(2, &[(0, 1.1)]),
            vec_of(2, &[(1, 1.0)]),
            vec_of(2, &[(1, 0.8)]),
            vec_of(2, &[(1, 1.2)]),
        ];
        let labels = vec![true, true, true, false, false, false];
        (samples, labels)
    }

    #[test]
    fn learns_a_separable_problem() {
        let (samples, labels) = separable();
        let model = LogisticRegression::fit(&samples, &labels, &ClassifierConfig::default());

        for (x, &y) in samples.iter().zip(&labels) {
            let p = model.predict_raw(x);
            if y {
                assert!(p > 0.5, "positive sample scored {p}");
            } else {
                assert!(p < 0.5, "negative sample scored {p}");
            }
        }
    }

    #[test]
    fn fit_is_deterministic() {
        let (samples, labels) = separable();
        let config = ClassifierConfig::default();
        let a = LogisticRegression::fit(&samples, &labels, &config);
        let b = LogisticRegression::fit(&samples, &labels, &config);
        assert_eq!(a.coefficients, b.coefficients);
        assert_eq!(a.intercept, b.intercept);
    }

    #[test]
    fn parameters_stay_finite() {
        let (samples, labels) = separable();
        let model = LogisticRegression::fit(&samples, &labels, &ClassifierConfig::default());
        assert!(model.is_finite());
    }

    #[test]
    fn zero_vector_scores_at_intercept() {
        let (samples, labels) = separable();
        let model = LogisticRegression::fit(&samples, &labels, &ClassifierConfig::default());
        let zero = SparseVector::zeros(2);
        assert!((model.decision(&zero) - model.intercept).abs() < 1e-12);
    }
}
