//! Probability calibration over raw decision values.
//!
//! Sigmoid (Platt scaling) fit by Newton's method with step halving, or
//! isotonic regression fit by pool-adjacent-violators. Both store plain
//! numeric parameters.

use serde::{Deserialize, Serialize};

/// Fitted calibration function mapping decision values to probabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "method")]
pub enum Calibrator {
    /// p = 1 / (1 + exp(a * f + b))
    Sigmoid { a: f64, b: f64 },
    /// Step function: sorted decision knots with monotone values.
    Isotonic { knots: Vec<f64>, values: Vec<f64> },
}

impl Calibrator {
    /// Platt scaling on (decision, label) pairs.
    ///
    /// Newton iterations on the regularized targets from Platt (1999),
    /// following the numerically stable formulation of Lin et al. (2007).
    pub fn fit_sigmoid(decisions: &[f64], labels: &[bool]) -> Self {
        let n_pos = labels.iter().filter(|&&y| y).count() as f64;
        let n_neg = labels.len() as f64 - n_pos;

        let hi = (n_pos + 1.0) / (n_pos + 2.0);
        let lo = 1.0 / (n_neg + 2.0);
        let targets: Vec<f64> = labels.iter().map(|&y| if y { hi } else { lo }).collect();

        let mut a = 0.0f64;
        let mut b = ((n_neg + 1.0) / (n_pos + 1.0)).ln();

        let objective = |a: f64, b: f64| -> f64 {
            decisions
                .iter()
                .zip(&targets)
                .map(|(&f, &t)| {
                    let z = a * f + b;
                    // log(1 + exp(z)) computed stably.
                    let log1pe = if z >= 0.0 {
                        z + (1.0 + (-z).exp()).ln()
                    } else {
                        (1.0 + z.exp()).ln()
                    };
                    t * z + log1pe - z
                })
                .sum()
        };

        let mut fval = objective(a, b);
        for _ in 0..100 {
            // Gradient and Hessian.
            let (mut g1, mut g2) = (0.0f64, 0.0f64);
            let (mut h11, mut h22, mut h21) = (1e-12f64, 1e-12f64, 0.0f64);
            for (&f, &t) in decisions.iter().zip(&targets) {
                let z = a * f + b;
                let p = 1.0 / (1.0 + z.exp());
                let q = 1.0 - p;
                let d1 = t - p;
                let d2 = p * q;
                g1 += f * d1;
                g2 += d1;
                h11 += f * f * d2;
                h22 += d2;
                h21 += f * d2;
            }
            if g1.abs() < 1e-7 && g2.abs() < 1e-7 {
                break;
            }

            let det = h11 * h22 - h21 * h21;
            let da = -(h22 * g1 - h21 * g2) / det;
            let db = -(h11 * g2 - h21 * g1) / det;
            let gd = g1 * da + g2 * db;

            // Backtracking line search.
            let mut step = 1.0f64;
            loop {
                let na = a + step * da;
                let nb = b + step * db;
                let nf = objective(na, nb);
                if nf < fval + 1e-4 * step * gd {
                    a = na;
                    b = nb;
                    fval = nf;
                    break;
                }
                step /= 2.0;
                if step < 1e-10 {
                    return Self::Sigmoid { a, b };
                }
            }
        }

        Self::Sigmoid { a, b }
    }

    /// Isotonic regression via pool-adjacent-violators on (decision, label).
    pub fn fit_isotonic(decisions: &[f64], labels: &[bool]) -> Self {
        let mut pairs: Vec<(f64, f64)> = decisions
            .iter()
            .zip(labels)
            .map(|(&d, &y)| (d, if y { 1.0 } else { 0.0 }))
            .collect();
        pairs.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(std::cmp::Ordering::Equal));

        // Blocks: (sum, weight, max_decision).
        let mut blocks: Vec<(f64, f64, f64)> = Vec::with_capacity(pairs.len());
        for (d, t) in pairs {
            blocks.push((t, 1.0, d));
            while blocks.len() >= 2 {
                let last = blocks[blocks.len() - 1];
                let prev = blocks[blocks.len() - 2];
                if prev.0 / prev.1 <= last.0 / last.1 {
                    break;
                }
                blocks.pop();
                blocks.pop();
                blocks.push((prev.0 + last.0, prev.1 + last.1, last.2));
            }
        }

        let knots = blocks.iter().map(|b| b.2).collect();
        let values = blocks.iter().map(|b| b.0 / b.1).collect();
        Self::Isotonic { knots, values }
    }

    /// Map a raw decision value to a calibrated probability in [0,1].
    pub fn calibrate(&self, decision: f64) -> f64 {
        let p = match self {
            Self::Sigmoid { a, b } => {
                let z = a * decision + b;
                // Stable sigmoid of -z.
                if z >= 0.0 {
                    (-z).exp() / (1.0 + (-z).exp())
                } else {
                    1.0 / (1.0 + z.exp())
                }
            }
            Self::Isotonic { knots, values } => match knots.iter().position(|&k| decision <= k) {
                Some(i) => values[i],
                None => values.last().copied().unwrap_or(0.0),
            },
        };
        p.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable() -> (Vec<f64>, Vec<bool>) {
        let decisions = vec![-2.5, -1.8, -1.2, -0.4, 0.3, 1.1, 1.9, 2.6];
        let labels = vec![false, false, false, false, true, true, true, true];
        (decisions, labels)
    }

    #[test]
    fn sigmoid_is_monotone_increasing_in_decision() {
        let (d, y) = separable();
        let cal = Calibrator::fit_sigmoid(&d, &y);
        let mut prev = cal.calibrate(-3.0);
        for f in [-1.0, 0.0, 1.0, 3.0] {
            let p = cal.calibrate(f);
            assert!(p >= prev, "sigmoid calibration must be monotone");
            prev = p;
        }
    }

    #[test]
    fn sigmoid_separates_classes() {
        let (d, y) = separable();
        let cal = Calibrator::fit_sigmoid(&d, &y);
        assert!(cal.calibrate(2.0) > 0.5);
        assert!(cal.calibrate(-2.0) < 0.5);
    }

    #[test]
    fn isotonic_is_monotone() {
        let (d, y) = separable();
        let cal = Calibrator::fit_isotonic(&d, &y);
        let mut prev = 0.0;
        for f in [-3.0, -1.0, 0.0, 1.0, 3.0] {
            let p = cal.calibrate(f);
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn isotonic_pools_violators() {
        // Labels not monotone in decision; PAV must average them out.
        let decisions = vec![0.0, 1.0, 2.0, 3.0];
        let labels = vec![false, true, false, true];
        let cal = Calibrator::fit_isotonic(&decisions, &labels);
        if let Calibrator::Isotonic { values, .. } = &cal {
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
        } else {
            panic!("expected isotonic calibrator");
        }
    }

    #[test]
    fn calibrated_output_is_a_probability() {
        let (d, y) = separable();
        for cal in [Calibrator::fit_sigmoid(&d, &y), Calibrator::fit_isotonic(&d, &y)] {
            for f in [-100.0, -1.0, 0.0, 1.0, 100.0] {
                let p = cal.calibrate(f);
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
