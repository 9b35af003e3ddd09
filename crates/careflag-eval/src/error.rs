//! Evaluation errors for the rule engine

use careflag_model::{ProviderError, ResolutionError};
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that abort a whole evaluation call
///
/// Both variants are batch-fatal: no partial result map is returned.
/// Missing per-patient data (e.g. an absent birth date) is not an error,
/// it degrades that patient's result instead.
#[derive(Debug, Clone, Error)]
pub enum EvalError {
    /// A symbolic name the rule needs has no dictionary mapping
    #[error("Configuration error: {0}")]
    Configuration(#[from] ResolutionError),

    /// A collaborator call failed; propagated unchanged, never retried here
    #[error("Collaborator failure: {0}")]
    Collaborator(#[from] ProviderError),
}
