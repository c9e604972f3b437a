//! ClassificationEngine: the full encode → infer → adjust → tier pipeline.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, info};

use taxa_adjust::ScoreAdjuster;
use taxa_classifier::ClassifierBank;
use taxa_core::config::TaxaConfig;
use taxa_core::constants::ARTIFACT_FORMAT_VERSION;
use taxa_core::errors::{ModelError, TaxaResult, TrainingError};
use taxa_core::models::{
    Classification, DocumentContext, EvidenceStatement, LabelTable, Score, ScoreRecord,
    SourceLocation, Tier, TrainingReport,
};
use taxa_evidence::EvidenceExtractor;
use taxa_features::WeightedFeatureEncoder;
use taxa_taxonomy::TaxonomyStore;

use crate::artifact::ModelArtifact;

/// The trained portion of the engine. Built atomically by `train` or
/// `load`, never partially mutated; retraining replaces it wholesale.
#[derive(Debug)]
struct TrainedState {
    encoder: WeightedFeatureEncoder,
    bank: ClassifierBank,
    model_version: String,
    training_date: DateTime<Utc>,
}

/// Orchestrates classification for one taxonomy version.
#[derive(Debug)]
pub struct ClassificationEngine {
    config: TaxaConfig,
    taxonomy: TaxonomyStore,
    adjuster: ScoreAdjuster,
    evidence: EvidenceExtractor,
    trained: Option<TrainedState>,
}

impl ClassificationEngine {
    /// Build an untrained engine. Fails on invalid configuration.
    pub fn new(config: TaxaConfig, taxonomy: TaxonomyStore) -> TaxaResult<Self> {
        config.validate()?;
        let adjuster = ScoreAdjuster::new(config.adjuster.clone());
        let evidence = EvidenceExtractor::new(config.evidence.clone());
        Ok(Self {
            config,
            taxonomy,
            adjuster,
            evidence,
            trained: None,
        })
    }

    pub fn is_trained(&self) -> bool {
        self.trained.is_some()
    }

    pub fn taxonomy(&self) -> &TaxonomyStore {
        &self.taxonomy
    }

    pub fn config(&self) -> &TaxaConfig {
        &self.config
    }

    /// Fit the encoder and, independently, one classifier per category.
    ///
    /// Fails with a length mismatch before touching any state; the engine
    /// stays untrained on error. Categories without positive examples are
    /// skipped and reported in the returned metrics.
    pub fn train(&mut self, texts: &[String], labels: &LabelTable) -> TaxaResult<TrainingReport> {
        if texts.len() != labels.len() {
            return Err(TrainingError::LengthMismatch {
                texts: texts.len(),
                labels: labels.len(),
            }
            .into());
        }
        if texts.is_empty() {
            return Err(TrainingError::EmptyTrainingSet.into());
        }

        info!(
            examples = texts.len(),
            categories = labels.categories().len(),
            taxonomy_version = %self.taxonomy.version(),
            "training started"
        );

        let encoder = WeightedFeatureEncoder::fit(
            self.config.encoder.clone(),
            texts,
            &self.taxonomy.keyword_set(),
        )?;
        let encoded = encoder.transform_batch(texts);
        debug!(dimension = encoder.dimension(), "corpus encoded");

        let (bank, per_category) = ClassifierBank::fit(&encoded, labels, &self.config.classifier);

        let report = TrainingReport {
            trained_at: Utc::now(),
            taxonomy_version: self.taxonomy.version().to_string(),
            examples: texts.len(),
            per_category,
        };
        info!(
            trained = report.trained_count(),
            skipped = report.skipped_count(),
            "training complete"
        );

        self.trained = Some(TrainedState {
            encoder,
            bank,
            model_version: uuid::Uuid::new_v4().to_string(),
            training_date: report.trained_at,
        });
        Ok(report)
    }

    /// Classify one document, returning categories at or above the medium
    /// threshold, sorted by descending score, the top one marked primary.
    pub fn classify(
        &self,
        text: &str,
        context: &DocumentContext,
    ) -> TaxaResult<Vec<Classification>> {
        self.classify_inner(text, context, false)
    }

    /// Classify one document, returning every category regardless of
    /// threshold. Still sorted, still exactly one primary.
    pub fn classify_all_scores(
        &self,
        text: &str,
        context: &DocumentContext,
    ) -> TaxaResult<Vec<Classification>> {
        self.classify_inner(text, context, true)
    }

    /// Classify and attach evidence extracted from section-labeled parts
    /// of the same document.
    pub fn classify_with_evidence(
        &self,
        text: &str,
        parts: &HashMap<SourceLocation, String>,
        context: &DocumentContext,
    ) -> TaxaResult<Vec<Classification>> {
        let mut results = self.classify_inner(text, context, false)?;
        for c in &mut results {
            c.evidence = self.evidence_for(&c.category_id, parts);
        }
        Ok(results)
    }

    /// Evidence for one category. Unknown category id → empty list.
    pub fn evidence_for(
        &self,
        category_id: &str,
        parts: &HashMap<SourceLocation, String>,
    ) -> Vec<EvidenceStatement> {
        match self.taxonomy.get(category_id) {
            Some(category) => self.evidence.extract(category, parts),
            None => Vec::new(),
        }
    }

    /// Classify documents in fixed-size chunks. Output order matches input
    /// order; each document's failure is isolated in its own result slot.
    /// `batch_size` overrides the configured chunk size and has no effect
    /// on output content.
    pub fn classify_batch(
        &self,
        texts: &[String],
        context: &DocumentContext,
        batch_size: Option<usize>,
    ) -> TaxaResult<Vec<TaxaResult<Vec<Classification>>>> {
        if self.trained.is_none() {
            return Err(ModelError::NotTrained.into());
        }
        let chunk_size = batch_size.unwrap_or(self.config.batch_size).max(1);

        let mut results = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(chunk_size) {
            // Chunks depend only on their own input and the immutable
            // trained state, so parallel processing cannot change results.
            let chunk_results: Vec<TaxaResult<Vec<Classification>>> = chunk
                .par_iter()
                .map(|text| self.classify(text, context))
                .collect();
            results.extend(chunk_results);
        }

        debug!(documents = texts.len(), chunk_size, "batch classified");
        Ok(results)
    }

    /// Persist the trained model. Fails on an untrained engine.
    pub fn save(&self, path: impl AsRef<Path>) -> TaxaResult<()> {
        let state = self
            .trained
            .as_ref()
            .ok_or(ModelError::SaveBeforeTraining)?;

        let artifact = ModelArtifact {
            format_version: ARTIFACT_FORMAT_VERSION,
            model_version: state.model_version.clone(),
            training_date: state.training_date,
            config: self.config.clone(),
            taxonomy: self.taxonomy.to_document(),
            encoder: state.encoder.clone(),
            bank: state.bank.clone(),
        };
        artifact.save(path)
    }

    /// Reconstruct a fully operational engine from an artifact alone.
    /// Errors leave nothing behind; a partially-loaded model is never
    /// observable.
    pub fn load(path: impl AsRef<Path>) -> TaxaResult<Self> {
        let artifact = ModelArtifact::load(path)?;
        let taxonomy = TaxonomyStore::from_document(artifact.taxonomy)?;
        let mut engine = Self::new(artifact.config, taxonomy)?;
        engine.trained = Some(TrainedState {
            encoder: artifact.encoder,
            bank: artifact.bank,
            model_version: artifact.model_version,
            training_date: artifact.training_date,
        });
        Ok(engine)
    }

    pub fn model_version(&self) -> Option<&str> {
        self.trained.as_ref().map(|s| s.model_version.as_str())
    }

    fn classify_inner(
        &self,
        text: &str,
        context: &DocumentContext,
        all_scores: bool,
    ) -> TaxaResult<Vec<Classification>> {
        let state = self.trained.as_ref().ok_or(ModelError::NotTrained)?;

        let encoded = state.encoder.transform(text);
        let text_lower = text.to_lowercase();
        let classified_at = Utc::now();

        let categories: Vec<_> = self.taxonomy.iter().collect();
        let mut scored: Vec<(usize, ScoreRecord)> = categories
            .iter()
            .enumerate()
            .map(|(position, category)| {
                // Categories skipped at training time fall back to 0.
                let p = state
                    .bank
                    .get(&category.category_id)
                    .map(|clf| clf.predict_probability(&encoded))
                    .unwrap_or(0.0);
                let record = ScoreRecord::new(&category.category_id, p * 100.0);
                let adjusted = self
                    .adjuster
                    .adjust_one(record, category, &text_lower, context);
                (position, adjusted)
            })
            .collect();

        if !all_scores {
            scored.retain(|(_, r)| r.score >= self.config.thresholds.medium);
        }

        // Descending score; ties resolve to taxonomy order. Scores are
        // clamped and finite, so the comparison never falls through.
        scored.sort_by(|a, b| {
            b.1.score
                .partial_cmp(&a.1.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let results = scored
            .into_iter()
            .enumerate()
            .map(|(i, (position, record))| {
                let category = categories[position];
                let score = Score::new(record.score);
                Classification {
                    category_id: category.category_id.clone(),
                    category_name: category.name.clone(),
                    score,
                    tier: Tier::from_score(score, &self.config.thresholds),
                    primary: i == 0,
                    evidence: Vec::new(),
                    classified_at,
                    taxonomy_version: category.taxonomy_version.clone(),
                }
            })
            .collect();
        Ok(results)
    }
}
