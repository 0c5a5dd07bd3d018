#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod question_bank_service;
pub mod sessions;

pub use sessions as session;

pub use error::{QuestionBankError, SessionError};
pub use format::{format_batch, format_counts, format_heading};
pub use question_bank_service::QuestionBankService;
pub use sessions::{Batch, InterviewSession, UsageCounts};
