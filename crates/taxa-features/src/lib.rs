//! # taxa-features
//!
//! Turns raw document text into fixed-dimension sparse TF-IDF vectors,
//! boosting vocabulary terms that are taxonomy keywords. Fit once on a
//! training corpus, then applied identically to every future input.

mod encoder;
mod sparse;
mod tokenizer;

pub use encoder::WeightedFeatureEncoder;
pub use sparse::SparseVector;
pub use tokenizer::{ngrams, tokenize};
