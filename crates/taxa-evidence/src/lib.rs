//! # taxa-evidence
//!
//! Extracts, ranks, and truncates sentence-level excerpts that justify a
//! category assignment, matching taxonomy keywords as whole words against
//! each document section in a fixed priority order.

mod extractor;
mod sentence_splitter;

pub use extractor::EvidenceExtractor;
pub use sentence_splitter::split_sentences;
