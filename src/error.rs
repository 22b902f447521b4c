//! Error taxonomy shared by every puzzle family.
//!
//! An unreachable sink, an unreachable goal cell or a board with zero
//! queen placements are *results*, never errors. Errors are raised at
//! generation or solve entry, before any search work starts, with the
//! single exception of [`EngineError::WorkerFailure`], which is reported
//! next to the solutions that other workers did find.

use crate::validation::Violation;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Failure kinds surfaced by generators, solvers and configs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EngineError {
    /// The instance is malformed (self-loop, non-square matrix, chained jump, ...).
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A generation config is outside its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The instance is well formed but the chosen strategy cannot accept it.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// A parallel search subtree panicked.
    #[error("worker for subtree {subtree} failed: {message}")]
    WorkerFailure {
        /// Index of the partition (first-column row for N-Queens).
        subtree: usize,
        /// Panic payload, when it was a string.
        message: String,
    },

    /// The worker pool could not be started.
    #[error("worker pool unavailable: {0}")]
    WorkerPool(String),

    /// A produced solution failed independent validation.
    #[error("solution rejected: {0}")]
    Rejected(#[from] Violation),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub(crate) fn invalid_instance(msg: impl Into<String>) -> Self {
        EngineError::InvalidInstance(msg.into())
    }

    pub(crate) fn invalid_config(msg: impl Into<String>) -> Self {
        EngineError::InvalidConfig(msg.into())
    }

    pub(crate) fn precondition(msg: impl Into<String>) -> Self {
        EngineError::PreconditionViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::invalid_instance("self-loop on node 3");
        assert_eq!(err.to_string(), "invalid instance: self-loop on node 3");

        let err = EngineError::WorkerFailure {
            subtree: 2,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "worker for subtree 2 failed: boom");
    }
}
