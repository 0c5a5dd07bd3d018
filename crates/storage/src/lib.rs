#![forbid(unsafe_code)]

pub mod import;
pub mod repository;
pub mod sqlite;

pub use import::{ImportError, ImportReport, SkippedRow, parse_questions, read_questions_csv};
pub use repository::{InMemoryRepository, QuestionRecord, QuestionRepository, Storage, StorageError};
