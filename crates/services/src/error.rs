//! Shared error types for the services crate.

use thiserror::Error;

use interview_core::model::{Category, QuestionId};
use interview_core::{PoolError, SamplerError};
use storage::repository::StorageError;

/// Errors emitted by session operations.
///
/// Each one is fatal to the calling action only; the session state of every
/// category is left as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("unknown category: {0}")]
    InvalidCategory(String),
    #[error("batch size must be > 0, got {0}")]
    InvalidBatchSize(usize),
    #[error("question {id} appears more than once in the {category} pool")]
    DuplicateQuestion { category: Category, id: QuestionId },
}

impl From<SamplerError> for SessionError {
    fn from(err: SamplerError) -> Self {
        match err {
            SamplerError::InvalidBatchSize(n) => SessionError::InvalidBatchSize(n),
        }
    }
}

impl From<PoolError> for SessionError {
    fn from(err: PoolError) -> Self {
        match err {
            PoolError::DuplicateQuestion { category, id } => {
                SessionError::DuplicateQuestion { category, id }
            }
        }
    }
}

/// Errors emitted by `QuestionBankService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
