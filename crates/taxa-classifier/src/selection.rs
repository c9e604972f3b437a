//! Chi-squared feature selection for binary labels.
//!
//! Scores each feature by the association between term presence and the
//! label, then keeps the top-k. Presence is binarized (value > 0), so the
//! statistic is a 2x2 contingency chi-squared.

use taxa_features::SparseVector;

/// Chi-squared score per feature column.
pub fn chi2_scores(samples: &[SparseVector], labels: &[bool], dimension: usize) -> Vec<f64> {
    let n = samples.len();
    let positives = labels.iter().filter(|&&y| y).count();

    // present_pos[i] / present_neg[i]: docs containing feature i, by class.
    let mut present_pos = vec![0usize; dimension];
    let mut present_neg = vec![0usize; dimension];
    for (x, &y) in samples.iter().zip(labels) {
        for (i, v) in x.iter() {
            if v > 0.0 {
                if y {
                    present_pos[i] += 1;
                } else {
                    present_neg[i] += 1;
                }
            }
        }
    }

    (0..dimension)
        .map(|i| {
            let n11 = present_pos[i] as f64;
            let n10 = present_neg[i] as f64;
            let n01 = (positives - present_pos[i]) as f64;
            let n00 = ((n - positives) - present_neg[i]) as f64;
            let total = n as f64;

            let row1 = n11 + n10;
            let row0 = n01 + n00;
            let col1 = n11 + n01;
            let col0 = n10 + n00;
            let denom = row1 * row0 * col1 * col0;
            if denom == 0.0 {
                return 0.0;
            }
            let det = n11 * n00 - n10 * n01;
            total * det * det / denom
        })
        .collect()
}

/// Indices of the `k` highest-scoring features, ascending, ready for
/// [`SparseVector::project`]. Ties resolve to the lower index.
pub fn select_k_best(
    samples: &[SparseVector],
    labels: &[bool],
    dimension: usize,
    k: usize,
) -> Vec<usize> {
    let scores = chi2_scores(samples, labels, dimension);
    let mut order: Vec<usize> = (0..dimension).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });
    order.truncate(k.min(dimension));
    order.sort_unstable();
    order
}
