//! Error taxonomy for the taxa engine.
//!
//! Each subsystem has its own error enum; `TaxaError` is the top-level
//! union every public operation returns.

mod config_error;
mod model_error;
mod taxonomy_error;
mod training_error;

pub use config_error::ConfigError;
pub use model_error::ModelError;
pub use taxonomy_error::TaxonomyError;
pub use training_error::TrainingError;

/// Top-level error type for the taxa engine.
#[derive(Debug, thiserror::Error)]
pub enum TaxaError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("training error: {0}")]
    Training(#[from] TrainingError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Shared result alias.
pub type TaxaResult<T> = Result<T, TaxaError>;
