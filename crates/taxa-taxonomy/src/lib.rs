//! # taxa-taxonomy
//!
//! Versioned taxonomy store. Loads a structured taxonomy document, validates
//! category ids (fatal), reports completeness gaps (non-fatal), and serves
//! categories in declared order to the rest of the engine.

mod completeness;
mod schema;
mod store;

pub use completeness::{CompletenessReport, CompletenessWarning};
pub use schema::{CategoryEntry, TaxonomyDocument};
pub use store::TaxonomyStore;
