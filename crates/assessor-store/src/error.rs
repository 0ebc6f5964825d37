//! Store error types.
//!
//! Grading itself never fails; these errors cover the stateful layer around
//! it, so callers can distinguish "no such entity" from a backend failure
//! without string matching.

use thiserror::Error;

/// Errors from repository and service operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No evaluation with the given id.
    #[error("evaluation {0} not found")]
    EvaluationNotFound(u32),

    /// No formation with the given id.
    #[error("formation {0} not found")]
    FormationNotFound(u32),

    /// The storage backend rejected or failed the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns `true` if retrying the same call cannot succeed.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::EvaluationNotFound(_) | StoreError::FormationNotFound(_)
        )
    }
}
