/// Model lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model is not trained; call train() or load() first")]
    NotTrained,

    #[error("cannot save an untrained model")]
    SaveBeforeTraining,

    #[error("incompatible model artifact: expected format version {expected}, found {found}")]
    FormatVersionMismatch { expected: u32, found: u32 },

    #[error("model artifact is malformed: {reason}")]
    MalformedArtifact { reason: String },
}
