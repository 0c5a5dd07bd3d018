use interview_core::model::{Category, Question};

use super::SqliteRepository;
use super::mapping::{map_question_row, question_id_to_i64};
use crate::repository::{QuestionRecord, QuestionRepository, StorageError};

#[async_trait::async_trait]
impl QuestionRepository for SqliteRepository {
    async fn upsert_question(&self, question: &Question) -> Result<(), StorageError> {
        let record = QuestionRecord::from_question(question);

        sqlx::query(
            r"
            INSERT INTO questions (id, category, prompt, topic, answer)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(category, id) DO UPDATE SET
                prompt = excluded.prompt,
                topic = excluded.topic,
                answer = excluded.answer
            ",
        )
        .bind(question_id_to_i64(record.id)?)
        .bind(record.category)
        .bind(record.prompt)
        .bind(record.topic)
        .bind(record.answer)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, category, prompt, topic, answer
            FROM questions
            ORDER BY id ASC, category ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        rows.iter().map(map_question_row).collect()
    }

    async fn list_by_category(&self, category: Category) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, category, prompt, topic, answer
            FROM questions
            WHERE category = ?1
            ORDER BY id ASC
            ",
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        rows.iter().map(map_question_row).collect()
    }
}
