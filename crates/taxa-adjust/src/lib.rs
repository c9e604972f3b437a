//! # taxa-adjust
//!
//! Deterministic, rule-based score correction applied after the calibrated
//! classifiers. Three composable stages in a configuration-pinned order
//! (default: negative-keyword penalty → context rules → context priors),
//! each returning a new immutable score record, with the final score
//! clamped to [0,100]. Every applied adjustment is recorded on the score
//! record so the result stays auditable.

mod adjuster;
mod penalty;
mod priors;
mod rules;

pub use adjuster::ScoreAdjuster;
