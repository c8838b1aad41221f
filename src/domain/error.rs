use thiserror::Error;

/// Faults raised by the crate. Budget exhaustion and revisits are not errors;
/// they come back through `StepResult`.
#[derive(Debug, Error)]
pub enum ForageError {
    #[error("candidate index {index} out of range for {len} candidates")]
    CandidateOutOfRange { index: usize, len: usize },

    #[error("hub '{0}' not found in hub table")]
    HubNotFound(String),

    #[error("batch inputs must share a length: expected {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForageError>;
