use async_trait::async_trait;
use interview_core::model::{Category, CategoryError, Question, QuestionDraft, QuestionError, QuestionId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of a question.
///
/// The category is kept as its normalized label so rows can be read back
/// without leaking storage concerns into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub category: String,
    pub prompt: String,
    pub topic: String,
    pub answer: String,
}

/// Reasons a stored record cannot become a domain `Question`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordError {
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Question(#[from] QuestionError),
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id(),
            category: question.category().as_str().to_owned(),
            prompt: question.prompt().to_owned(),
            topic: question.topic().to_owned(),
            answer: question.answer().to_owned(),
        }
    }

    /// Convert the record back into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` if the category label is unknown or the text
    /// fields fail validation.
    pub fn into_question(self) -> Result<Question, RecordError> {
        let category: Category = self.category.parse()?;
        Ok(QuestionDraft {
            id: self.id,
            category,
            prompt: self.prompt,
            topic: self.topic,
            answer: self.answer,
        }
        .validate()?)
    }
}

/// Repository contract for the question catalog.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist or replace a question, keyed by `(category, id)`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the question cannot be stored.
    async fn upsert_question(&self, question: &Question) -> Result<(), StorageError>;

    /// Every stored question, ordered by id then category label.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if rows cannot be read or decoded.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Questions of one category, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if rows cannot be read or decoded.
    async fn list_by_category(&self, category: Category) -> Result<Vec<Question>, StorageError>;

    /// Persist a batch of questions in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first `StorageError`.
    async fn upsert_questions(&self, questions: &[Question]) -> Result<(), StorageError> {
        for question in questions {
            self.upsert_question(question).await?;
        }
        Ok(())
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<HashMap<(Category, QuestionId), Question>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_for_listing(questions: &mut [Question]) {
    questions.sort_by(|a, b| {
        (a.id(), a.category().as_str()).cmp(&(b.id(), b.category().as_str()))
    });
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn upsert_question(&self, question: &Question) -> Result<(), StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert((question.category(), question.id()), question.clone());
        Ok(())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut questions: Vec<Question> = guard.values().cloned().collect();
        sort_for_listing(&mut questions);
        Ok(questions)
    }

    async fn list_by_category(&self, category: Category) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut questions: Vec<Question> = guard
            .values()
            .filter(|q| q.category() == category)
            .cloned()
            .collect();
        sort_for_listing(&mut questions);
        Ok(questions)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(InMemoryRepository::new());
        Self { questions }
    }
}
