//! Versioned model artifact: everything needed to reconstruct a fully
//! operational engine from one file.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use taxa_classifier::ClassifierBank;
use taxa_core::config::TaxaConfig;
use taxa_core::constants::ARTIFACT_FORMAT_VERSION;
use taxa_core::errors::{ModelError, TaxaResult};
use taxa_features::WeightedFeatureEncoder;
use taxa_taxonomy::TaxonomyDocument;

/// Persisted model: taxonomy snapshot, fitted encoder, per-category
/// classifier parameters, the configuration used, and version metadata.
/// All classifier parameters are plain numeric arrays, so the format is
/// readable without this implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub model_version: String,
    pub training_date: DateTime<Utc>,
    pub config: TaxaConfig,
    pub taxonomy: TaxonomyDocument,
    pub encoder: WeightedFeatureEncoder,
    pub bank: ClassifierBank,
}

impl ModelArtifact {
    /// Write the artifact to `path` atomically: serialize to a sibling
    /// temp file, then rename over the target, so a reader never observes
    /// a partially-written artifact.
    pub fn save(&self, path: impl AsRef<Path>) -> TaxaResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_vec_pretty(self)?;

        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        info!(
            path = %path.display(),
            model_version = %self.model_version,
            bytes = json.len(),
            "model artifact saved"
        );
        Ok(())
    }

    /// Read and decode an artifact, rejecting unknown format versions.
    pub fn load(path: impl AsRef<Path>) -> TaxaResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read(path)?;
        let artifact: Self =
            serde_json::from_slice(&json).map_err(|e| ModelError::MalformedArtifact {
                reason: e.to_string(),
            })?;

        if artifact.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelError::FormatVersionMismatch {
                expected: ARTIFACT_FORMAT_VERSION,
                found: artifact.format_version,
            }
            .into());
        }

        info!(
            path = %path.display(),
            model_version = %artifact.model_version,
            "model artifact loaded"
        );
        Ok(artifact)
    }
}
