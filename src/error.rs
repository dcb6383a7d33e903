//! Error types for the seating engine

use thiserror::Error;

use crate::engine::EngineStage;
use crate::validation::ValidationError;

/// Error returned by an arrangement run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Inputs rejected before any assignment work.
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// A stage failed after validation and no fallback was allowed.
    #[error("Unexpected failure during {stage}: {message}")]
    Unexpected { stage: EngineStage, message: String },
}

impl EngineError {
    /// Creates an unexpected stage failure.
    pub fn unexpected(stage: EngineStage, message: impl Into<String>) -> Self {
        Self::Unexpected {
            stage,
            message: message.into(),
        }
    }

    /// Validation errors, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Unexpected { .. } => None,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
