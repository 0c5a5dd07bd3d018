use interview_core::model::{Question, QuestionId};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::{QuestionRecord, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn question_id_from_i64(v: i64) -> Result<QuestionId, StorageError> {
    u64::try_from(v)
        .map(QuestionId::new)
        .map_err(|_| StorageError::Serialization("question id sign overflow".into()))
}

pub(crate) fn question_id_to_i64(id: QuestionId) -> Result<i64, StorageError> {
    i64::try_from(id.value())
        .map_err(|_| StorageError::Serialization("question id overflow".into()))
}

pub(crate) fn map_question_row(row: &SqliteRow) -> Result<Question, StorageError> {
    let record = QuestionRecord {
        id: question_id_from_i64(row.try_get("id").map_err(ser)?)?,
        category: row.try_get("category").map_err(ser)?,
        prompt: row.try_get("prompt").map_err(ser)?,
        topic: row.try_get("topic").map_err(ser)?,
        answer: row.try_get("answer").map_err(ser)?,
    };
    record.into_question().map_err(ser)
}
