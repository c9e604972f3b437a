//! # taxa-classifier
//!
//! One calibrated binary classifier per taxonomy category: optional
//! chi-squared feature selection feeding a logistic-regression
//! discriminator, wrapped in a probability calibrator fit on
//! cross-validated decision values. Categories without positive training
//! examples are skipped, not fatal.
//!
//! All trained parameters are plain numeric arrays so the persisted model
//! artifact stays portable across implementations.

mod bank;
mod calibration;
mod logistic;
mod selection;

pub use bank::{CategoryClassifier, ClassifierBank};
pub use calibration::Calibrator;
pub use logistic::LogisticRegression;
pub use selection::select_k_best;
