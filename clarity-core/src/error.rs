//! Error types for Clarity Planner.

use thiserror::Error;

/// Errors that halt a planning submission.
#[derive(Error, Debug)]
pub enum ClarityError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed response from the extraction model: {reason}")]
    MalformedResponse { raw: String, reason: String },

    #[error("Extraction request failed: {0}")]
    Extraction(String),

    #[error("Nothing to plan: the input text is empty")]
    EmptyInput,
}

impl ClarityError {
    /// The raw model output behind a `MalformedResponse`, for diagnosis.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            ClarityError::MalformedResponse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

/// Result type alias for Clarity operations.
pub type ClarityResult<T> = Result<T, ClarityError>;

/// Non-fatal conditions reported next to a successful result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClarityWarning {
    #[error("No tasks found. Try adding more detail to your notes.")]
    EmptyPlan,
}
