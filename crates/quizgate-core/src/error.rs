//! Workflow error types.
//!
//! `ServiceError` is defined in `quizgate-core` rather than in the client
//! crate so the review engine can classify remote failures without string
//! matching. The remaining enums follow the spec taxonomy: validation
//! errors are caught before any request is sent, consistency errors signal
//! a stale or corrupt snapshot, and service errors are scoped to the single
//! submission that triggered them.

use thiserror::Error;

use crate::scoring::UnscoredAnswer;

/// Errors returned by the remote quiz service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The generation id does not exist (HTTP 404).
    #[error("generation {0} not found")]
    GenerationNotFound(u64),

    /// The service refused the operation input (HTTP 400/422).
    #[error("request rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Any other error response from the service.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A transport-level failure.
    #[error("network error: {0}")]
    Network(String),
}

impl ServiceError {
    /// Returns `true` if the error means the generation no longer exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::GenerationNotFound(_))
    }
}

/// Malformed operation input, rejected before any request is issued.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("question text must not be empty")]
    EmptyQuestion,

    #[error("question text exceeds {max} characters (got {len})")]
    QuestionTooLong { len: usize, max: usize },

    #[error("question count must be at least 1")]
    ZeroCount,

    #[error("question count {count} exceeds the per-request limit of {max}")]
    CountTooLarge { count: u32, max: u32 },

    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
}

/// An id failed to resolve against the current snapshot.
///
/// This is a defect signal (stale or corrupt snapshot), not a normal
/// user-facing condition; callers log it and refuse to render a position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("answer choice {answer_id} references question {question_id}, which is not in the snapshot")]
    UnknownQuestion { answer_id: u64, question_id: u64 },

    #[error("answer choice {answer_id} is not in the snapshot")]
    UnknownAnswer { answer_id: u64 },

    #[error("answer choice {answer_id} is not among the answers of question {question_id}")]
    NotInQuestion { answer_id: u64, question_id: u64 },
}

/// Umbrella error for review-engine operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The export gate is closed: unscored answer choices remain. Carries
    /// the resolved diagnostics so callers can show what is blocking.
    #[error("export blocked: {} answer choice(s) still unscored", unscored.len())]
    NotExportReady { unscored: Vec<UnscoredAnswer> },

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classification() {
        assert!(ServiceError::GenerationNotFound(3).is_not_found());
        assert!(!ServiceError::Timeout(30).is_not_found());
    }

    #[test]
    fn error_messages() {
        let err = ValidationError::CountTooLarge { count: 99, max: 25 };
        assert_eq!(
            err.to_string(),
            "question count 99 exceeds the per-request limit of 25"
        );

        let err = ConsistencyError::UnknownQuestion {
            answer_id: 5,
            question_id: 9,
        };
        assert!(err.to_string().contains("references question 9"));
    }
}
