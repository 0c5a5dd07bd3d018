use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Category, Question, QuestionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("question {id} appears more than once in the {category} pool")]
    DuplicateQuestion { category: Category, id: QuestionId },
}

/// The fixed, ordered set of questions belonging to one category.
///
/// Built once from the validated dataset and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPool {
    category: Category,
    questions: Vec<Question>,
}

impl CategoryPool {
    /// Select the questions of `category`, preserving dataset order.
    ///
    /// A category without questions yields an empty pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::DuplicateQuestion` if two questions of `category`
    /// share an id.
    pub fn from_questions<'a>(
        category: Category,
        questions: impl IntoIterator<Item = &'a Question>,
    ) -> Result<Self, PoolError> {
        let mut seen = HashSet::new();
        let mut selected = Vec::new();
        for question in questions.into_iter().filter(|q| q.category() == category) {
            if !seen.insert(question.id()) {
                return Err(PoolError::DuplicateQuestion {
                    category,
                    id: question.id(),
                });
            }
            selected.push(question.clone());
        }
        Ok(Self {
            category,
            questions: selected,
        })
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }
}
