//! # taxa-engine
//!
//! ClassificationEngine: orchestrates encode → per-category inference →
//! score adjustment → tiering, plus training and versioned model-artifact
//! persistence. A trained engine is immutable and safe for concurrent
//! read-only classification.

mod artifact;
mod engine;

pub use artifact::ModelArtifact;
pub use engine::ClassificationEngine;
