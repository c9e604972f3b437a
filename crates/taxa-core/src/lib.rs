//! # taxa-core
//!
//! Foundation crate for the taxa classification engine.
//! Defines all shared types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::TaxaConfig;
pub use errors::{TaxaError, TaxaResult};
pub use models::{Classification, DocumentContext, EvidenceStatement, Score, SourceLocation, TaxonomyCategory, Tier};
