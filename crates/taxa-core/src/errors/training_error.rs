/// Training input errors. Fatal, raised before any partial state is committed.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("training input length mismatch: {texts} texts vs {labels} label rows")]
    LengthMismatch { texts: usize, labels: usize },

    #[error("label row {row} has {got} columns, expected {expected}")]
    RaggedLabelRow { row: usize, got: usize, expected: usize },

    #[error("training set is empty")]
    EmptyTrainingSet,
}
