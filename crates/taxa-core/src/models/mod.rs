//! Shared value types flowing between the workspace crates.

mod category;
mod classification;
mod context;
mod evidence;
mod labels;
mod metrics;
mod score;
mod score_record;

pub use category::TaxonomyCategory;
pub use classification::Classification;
pub use context::DocumentContext;
pub use evidence::{EvidenceStatement, SourceLocation};
pub use labels::LabelTable;
pub use metrics::{CategoryTrainingMetrics, TrainingReport};
pub use score::{Score, Tier};
pub use score_record::{Adjustment, ScoreRecord};
