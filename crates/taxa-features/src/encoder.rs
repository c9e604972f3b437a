//! TF-IDF encoder with taxonomy keyword boosting.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use taxa_core::config::EncoderConfig;
use taxa_core::errors::TaxaResult;

use crate::sparse::SparseVector;
use crate::tokenizer::{ngrams, tokenize};

/// Fitted TF-IDF encoder.
///
/// Vocabulary, IDF weights, and the keyword boost set are frozen at fit
/// time; `transform` applies them identically to all future inputs. The
/// encoder keeps no per-call state, so a fitted instance is safe for
/// concurrent use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedFeatureEncoder {
    config: EncoderConfig,
    /// term → column index, indices assigned in sorted-term order.
    vocabulary: HashMap<String, usize>,
    /// Per-column inverse document frequency.
    idf: Vec<f64>,
    /// Per-column weight multiplier (keyword_boost_factor for taxonomy
    /// keywords, 1.0 otherwise).
    boost: Vec<f64>,
}

impl WeightedFeatureEncoder {
    /// Fit on a training corpus.
    ///
    /// `taxonomy_keywords` is the lowercased union of every category's
    /// keywords; vocabulary terms exactly matching one of them get their
    /// weight multiplied by `keyword_boost_factor`.
    pub fn fit(
        config: EncoderConfig,
        documents: &[String],
        taxonomy_keywords: &HashSet<String>,
    ) -> TaxaResult<Self> {
        config.validate()?;

        let stop_words: HashSet<String> = config.stop_words.iter().cloned().collect();
        let n_docs = documents.len();

        // Document frequency per term.
        let mut df: HashMap<String, usize> = HashMap::new();
        // Corpus-wide term frequency, used to rank terms for the cap.
        let mut tf_total: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = tokenize(doc, &stop_words);
            let terms = ngrams(&tokens, config.ngram_min, config.ngram_max);
            let unique: HashSet<&String> = terms.iter().collect();
            for term in &terms {
                *tf_total.entry(term.clone()).or_insert(0) += 1;
            }
            for term in unique {
                *df.entry(term.clone()).or_insert(0) += 1;
            }
        }

        // Apply document-frequency cutoffs.
        let max_df_count = (config.max_df * n_docs as f64).ceil() as usize;
        let mut kept: Vec<(String, usize)> = df
            .into_iter()
            .filter(|&(_, d)| d >= config.min_df && d <= max_df_count.max(1))
            .collect();

        // Cap vocabulary by corpus frequency, ties broken alphabetically so
        // fitting is deterministic.
        if kept.len() > config.max_features {
            kept.sort_by(|a, b| {
                let fa = tf_total.get(&a.0).copied().unwrap_or(0);
                let fb = tf_total.get(&b.0).copied().unwrap_or(0);
                fb.cmp(&fa).then_with(|| a.0.cmp(&b.0))
            });
            kept.truncate(config.max_features);
        }

        // Assign column indices in sorted-term order.
        kept.sort_by(|a, b| a.0.cmp(&b.0));

        let mut vocabulary = HashMap::with_capacity(kept.len());
        let mut idf = Vec::with_capacity(kept.len());
        let mut boost = Vec::with_capacity(kept.len());
        for (i, (term, doc_freq)) in kept.into_iter().enumerate() {
            // Smoothed IDF; never zero, so rare terms always contribute.
            idf.push(((1.0 + n_docs as f64) / (1.0 + doc_freq as f64)).ln() + 1.0);
            boost.push(if taxonomy_keywords.contains(&term) {
                config.keyword_boost_factor
            } else {
                1.0
            });
            vocabulary.insert(term, i);
        }

        Ok(Self {
            config,
            vocabulary,
            idf,
            boost,
        })
    }

    /// Vocabulary size (the fixed vector dimension).
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode one document with the fitted vocabulary.
    ///
    /// Text containing only out-of-vocabulary terms yields a zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let stop_words: HashSet<String> = self.config.stop_words.iter().cloned().collect();
        let tokens = tokenize(text, &stop_words);
        let terms = ngrams(&tokens, self.config.ngram_min, self.config.ngram_max);

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in &terms {
            if let Some(&i) = self.vocabulary.get(term) {
                *counts.entry(i).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(i, tf)| (i, tf * self.idf[i] * self.boost[i]))
            .collect();
        SparseVector::new(self.dimension(), entries).normalized()
    }

    /// Encode a batch of documents.
    pub fn transform_batch(&self, texts: &[String]) -> Vec<SparseVector> {
        texts.iter().map(|t| self.transform(t)).collect()
    }

    /// Column index of a term, if in vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "machine learning models for text".to_string(),
            "neural network architectures in machine learning".to_string(),
            "quantum computing with qubit registers".to_string(),
            "quantum entanglement research".to_string(),
        ]
    }

    fn fit(keywords: &[&str]) -> WeightedFeatureEncoder {
        let set: HashSet<String> = keywords.iter().map(|k| k.to_string()).collect();
        WeightedFeatureEncoder::fit(EncoderConfig::default(), &corpus(), &set).unwrap()
    }

    #[test]
    fn non_positive_max_features_is_a_config_error() {
        let config = EncoderConfig {
            max_features: 0,
            ..Default::default()
        };
        let err = WeightedFeatureEncoder::fit(config, &corpus(), &HashSet::new()).unwrap_err();
        assert!(err.to_string().contains("max_features"));
    }

    #[test]
    fn transform_is_deterministic() {
        let enc = fit(&[]);
        let a = enc.transform("machine learning with neural network");
        let b = enc.transform("machine learning with neural network");
        assert_eq!(a, b);
    }

    #[test]
    fn keyword_terms_are_boosted() {
        let plain = fit(&[]);
        let boosted = fit(&["quantum"]);
        let idx = boosted.term_index("quantum").expect("in vocabulary");

        let text = "quantum research machine";
        let v_plain = plain.transform(text);
        let v_boost = boosted.transform(text);

        // After normalization, the boosted term carries a larger share of
        // the vector mass.
        let weight = |v: &SparseVector| {
            v.iter()
                .find(|&(i, _)| i == idx)
                .map(|(_, w)| w)
                .unwrap_or(0.0)
        };
        assert!(weight(&v_boost) > weight(&v_plain));
    }

    #[test]
    fn unseen_terms_yield_zero_vector() {
        let enc = fit(&[]);
        let v = enc.transform("zzz xxyyzz unrelatedterm");
        assert!(v.is_zero());
        assert_eq!(v.dimension(), enc.dimension());
    }

    #[test]
    fn empty_text_yields_zero_vector() {
        let enc = fit(&[]);
        assert!(enc.transform("").is_zero());
    }

    #[test]
    fn max_features_caps_vocabulary() {
        let config = EncoderConfig {
            max_features: 3,
            ..Default::default()
        };
        let enc = WeightedFeatureEncoder::fit(config, &corpus(), &HashSet::new()).unwrap();
        assert!(enc.dimension() <= 3);
    }

    #[test]
    fn bigrams_enter_vocabulary() {
        let enc = fit(&[]);
        assert!(enc.term_index("machine learning").is_some());
    }

    #[test]
    fn min_df_drops_rare_terms() {
        let config = EncoderConfig {
            min_df: 2,
            ..Default::default()
        };
        let enc = WeightedFeatureEncoder::fit(config, &corpus(), &HashSet::new()).unwrap();
        // "entanglement" appears in one document only.
        assert!(enc.term_index("entanglement").is_none());
        // "quantum" appears in two.
        assert!(enc.term_index("quantum").is_some());
    }

    #[test]
    fn batch_matches_individual() {
        let enc = fit(&[]);
        let texts = corpus();
        let batch = enc.transform_batch(&texts);
        for (i, t) in texts.iter().enumerate() {
            assert_eq!(batch[i], enc.transform(t));
        }
    }

    #[test]
    fn serde_round_trip_preserves_transform() {
        let enc = fit(&["quantum"]);
        let json = serde_json::to_string(&enc).unwrap();
        let back: WeightedFeatureEncoder = serde_json::from_str(&json).unwrap();
        let text = "quantum machine learning";
        assert_eq!(enc.transform(text), back.transform(text));
    }
}
