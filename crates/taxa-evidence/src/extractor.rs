//! Keyword-match evidence extraction.

use std::collections::HashMap;

use regex::Regex;

use taxa_core::config::EvidenceConfig;
use taxa_core::constants::{ELLIPSIS, MAX_RATIONALE_KEYWORDS};
use taxa_core::models::{EvidenceStatement, SourceLocation, TaxonomyCategory};

use crate::sentence_splitter::split_sentences;

/// Ranks and truncates supporting excerpts for one category assignment.
#[derive(Debug, Clone)]
pub struct EvidenceExtractor {
    config: EvidenceConfig,
}

struct Candidate {
    sentence: String,
    source: SourceLocation,
    /// Rank of the source in the configured priority order.
    source_rank: usize,
    /// First-occurrence position across the scan.
    occurrence: usize,
    matched: Vec<String>,
}

impl EvidenceExtractor {
    pub fn new(config: EvidenceConfig) -> Self {
        Self { config }
    }

    /// Extract up to `max_statements` evidence statements for `category`
    /// from section-labeled document parts.
    ///
    /// Empty parts, or a category without keywords, yield an empty list.
    pub fn extract(
        &self,
        category: &TaxonomyCategory,
        parts: &HashMap<SourceLocation, String>,
    ) -> Vec<EvidenceStatement> {
        if category.keywords.is_empty() || parts.is_empty() {
            return Vec::new();
        }

        // Whole-word, case-insensitive matcher per keyword. Keywords that
        // fail to compile (pathological punctuation) are skipped.
        let matchers: Vec<(&String, Regex)> = category
            .keywords
            .iter()
            .filter_map(|kw| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(kw));
                Regex::new(&pattern).ok().map(|re| (kw, re))
            })
            .collect();
        if matchers.is_empty() {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        let mut occurrence = 0usize;
        for (source_rank, source) in self.config.source_priority.iter().enumerate() {
            let Some(text) = parts.get(source) else {
                continue;
            };
            for sentence in split_sentences(text) {
                let matched: Vec<String> = matchers
                    .iter()
                    .filter(|(_, re)| re.is_match(&sentence))
                    .map(|(kw, _)| (*kw).clone())
                    .collect();
                if matched.len() >= self.config.min_keyword_matches {
                    candidates.push(Candidate {
                        sentence,
                        source: *source,
                        source_rank,
                        occurrence,
                        matched,
                    });
                }
                occurrence += 1;
            }
        }

        // Match count descending, then source priority, then first occurrence.
        candidates.sort_by(|a, b| {
            b.matched
                .len()
                .cmp(&a.matched.len())
                .then_with(|| a.source_rank.cmp(&b.source_rank))
                .then_with(|| a.occurrence.cmp(&b.occurrence))
        });
        candidates.truncate(self.config.max_statements);

        candidates
            .into_iter()
            .map(|c| EvidenceStatement {
                excerpt: truncate_words(&c.sentence, self.config.excerpt_max_words),
                source_location: c.source,
                rationale: rationale(&c.matched),
            })
            .collect()
    }
}

/// Truncate to `max_words` words, appending an ellipsis when cut.
fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.trim().to_string();
    }
    format!("{}{ELLIPSIS}", words[..max_words].join(" "))
}

/// Name the matched keywords, listing at most five.
fn rationale(matched: &[String]) -> String {
    let shown = &matched[..matched.len().min(MAX_RATIONALE_KEYWORDS)];
    format!("Matched keywords: {}", shown.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(keywords: &[&str]) -> TaxonomyCategory {
        TaxonomyCategory {
            category_id: "quantum".into(),
            name: "Quantum".into(),
            definition: String::new(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            negative_keywords: vec![],
            parent_category_id: None,
            taxonomy_version: "1".into(),
        }
    }

    fn parts(entries: &[(SourceLocation, &str)]) -> HashMap<SourceLocation, String> {
        entries
            .iter()
            .map(|(loc, text)| (*loc, text.to_string()))
            .collect()
    }

    fn extractor() -> EvidenceExtractor {
        EvidenceExtractor::new(EvidenceConfig::default())
    }

    #[test]
    fn extracts_matching_sentences_with_rationale() {
        let cat = category(&["quantum", "qubit"]);
        let parts = parts(&[(
            SourceLocation::Abstract,
            "We study qubit coherence in quantum registers. Unrelated funding detail here.",
        )]);
        let evidence = extractor().extract(&cat, &parts);
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence[0].source_location, SourceLocation::Abstract);
        assert!(evidence[0].rationale.contains("quantum"));
        assert!(evidence[0].rationale.contains("qubit"));
    }

    #[test]
    fn whole_word_matching_rejects_substrings() {
        let cat = category(&["ai"]);
        let parts = parts(&[(SourceLocation::Abstract, "Painting maintenance and repair.")]);
        assert!(extractor().extract(&cat, &parts).is_empty());
    }

    #[test]
    fn ranks_by_match_count_then_source_priority() {
        let cat = category(&["quantum", "qubit", "entanglement"]);
        let parts = parts(&[
            (SourceLocation::Title, "Quantum qubit entanglement platform."),
            (SourceLocation::Abstract, "A quantum sensing effort."),
        ]);
        let evidence = extractor().extract(&cat, &parts);
        // Title sentence matches 3 keywords, abstract only 1.
        assert_eq!(evidence[0].source_location, SourceLocation::Title);
        assert_eq!(evidence[1].source_location, SourceLocation::Abstract);
    }

    #[test]
    fn equal_scores_prefer_higher_priority_source() {
        let cat = category(&["quantum"]);
        let parts = parts(&[
            (SourceLocation::Title, "Quantum platform."),
            (SourceLocation::Abstract, "Quantum sensing effort."),
        ]);
        let evidence = extractor().extract(&cat, &parts);
        assert_eq!(evidence[0].source_location, SourceLocation::Abstract);
    }

    #[test]
    fn caps_at_max_statements() {
        let cat = category(&["quantum"]);
        let text = "Quantum one. Quantum two. Quantum three. Quantum four. Quantum five.";
        let parts = parts(&[(SourceLocation::Abstract, text)]);
        let evidence = extractor().extract(&cat, &parts);
        assert_eq!(evidence.len(), 3);
    }

    #[test]
    fn long_sentences_are_truncated_with_ellipsis() {
        let cat = category(&["quantum"]);
        let long = format!("quantum {}", "word ".repeat(80));
        let parts = parts(&[(SourceLocation::Abstract, long.as_str())]);
        let evidence = extractor().extract(&cat, &parts);
        let excerpt = &evidence[0].excerpt;
        assert!(excerpt.ends_with("..."));
        let word_count = excerpt.trim_end_matches("...").split_whitespace().count();
        assert!(word_count <= 50);
    }

    #[test]
    fn empty_parts_yield_empty_evidence() {
        let cat = category(&["quantum"]);
        assert!(extractor().extract(&cat, &HashMap::new()).is_empty());
    }

    #[test]
    fn keywordless_category_yields_empty_evidence() {
        let cat = category(&[]);
        let parts = parts(&[(SourceLocation::Abstract, "Some text.")]);
        assert!(extractor().extract(&cat, &parts).is_empty());
    }

    #[test]
    fn rationale_lists_at_most_five_keywords() {
        let cat = category(&["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta"]);
        let parts = parts(&[(
            SourceLocation::Abstract,
            "alpha beta gamma delta epsilon zeta eta all appear here.",
        )]);
        let evidence = extractor().extract(&cat, &parts);
        let listed = evidence[0]
            .rationale
            .trim_start_matches("Matched keywords: ")
            .split(", ")
            .count();
        assert_eq!(listed, 5);
    }

    #[test]
    fn unconfigured_sources_are_ignored() {
        let cat = category(&["quantum"]);
        // Description is a known location but not in the default priority list.
        let parts = parts(&[(SourceLocation::Description, "Quantum text here.")]);
        assert!(extractor().extract(&cat, &parts).is_empty());
    }
}
