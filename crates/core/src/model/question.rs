use thiserror::Error;

use crate::model::{category::Category, ids::QuestionId};

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as read from a dataset row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub category: Category,
    pub prompt: String,
    pub topic: String,
    pub answer: String,
}

impl QuestionDraft {
    /// Trim the text fields and check that prompt and answer carry content.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` or `QuestionError::EmptyAnswer`
    /// when the respective field is blank.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt(self.id));
        }
        let answer = self.answer.trim();
        if answer.is_empty() {
            return Err(QuestionError::EmptyAnswer(self.id));
        }

        Ok(Question {
            id: self.id,
            category: self.category,
            prompt: prompt.to_string(),
            topic: self.topic.trim().to_string(),
            answer: answer.to_string(),
        })
    }
}

/// An interview question. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    category: Category,
    prompt: String,
    topic: String,
    answer: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Grouping keywords shown next to the prompt. May be empty.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {0} has an empty prompt")]
    EmptyPrompt(QuestionId),

    #[error("question {0} has an empty answer")]
    EmptyAnswer(QuestionId),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(prompt: &str, answer: &str) -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new(1),
            category: Category::Easy,
            prompt: prompt.into(),
            topic: "  OSPF ".into(),
            answer: answer.into(),
        }
    }

    #[test]
    fn question_fails_if_prompt_blank() {
        let err = draft("   ", "ok").validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt(QuestionId::new(1)));
    }

    #[test]
    fn question_fails_if_answer_blank() {
        let err = draft("What is OSPF?", "\n").validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyAnswer(QuestionId::new(1)));
    }

    #[test]
    fn valid_question_is_trimmed() {
        let question = draft(" What is OSPF? ", " A link-state protocol. ")
            .validate()
            .unwrap();
        assert_eq!(question.prompt(), "What is OSPF?");
        assert_eq!(question.topic(), "OSPF");
        assert_eq!(question.answer(), "A link-state protocol.");
        assert_eq!(question.category(), Category::Easy);
    }

    #[test]
    fn blank_topic_is_allowed() {
        let mut d = draft("Q", "A");
        d.topic = " ".into();
        assert_eq!(d.validate().unwrap().topic(), "");
    }
}
