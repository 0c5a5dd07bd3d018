use std::sync::Arc;

use interview_core::SessionSettings;
use interview_core::model::Question;
use storage::repository::QuestionRepository;
use tracing::info;

use crate::error::QuestionBankError;
use crate::sessions::InterviewSession;

/// Opens interview sessions over the stored question catalog.
#[derive(Clone)]
pub struct QuestionBankService {
    questions: Arc<dyn QuestionRepository>,
    settings: SessionSettings,
}

impl QuestionBankService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>, settings: SessionSettings) -> Self {
        Self {
            questions,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Store questions, replacing any with the same category and id.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Storage` if the repository rejects a write.
    pub async fn import(&self, questions: &[Question]) -> Result<(), QuestionBankError> {
        self.questions.upsert_questions(questions).await?;
        info!(count = questions.len(), "imported questions");
        Ok(())
    }

    /// Load the stored catalog and start a session with nothing drawn yet.
    ///
    /// Pools follow the repository's listing order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Storage` if the catalog cannot be read and
    /// `QuestionBankError::Session` if it holds a repeated id.
    pub async fn open_session(&self) -> Result<InterviewSession, QuestionBankError> {
        let questions = self.questions.list_questions().await?;
        self.open_session_from(&questions)
    }

    /// Start a session over questions the caller already holds, keeping
    /// their order, such as the rows of an imported file.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Session` if an id repeats within a category.
    pub fn open_session_from(
        &self,
        questions: &[Question],
    ) -> Result<InterviewSession, QuestionBankError> {
        let session = InterviewSession::new(questions, &self.settings)?;
        info!(
            questions = questions.len(),
            batch_size = self.settings.batch_size(),
            "opened interview session"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::model::{Category, QuestionDraft, QuestionId};
    use storage::import::parse_questions;
    use storage::repository::InMemoryRepository;

    fn build_question(id: u64, category: Category) -> Question {
        QuestionDraft {
            id: QuestionId::new(id),
            category,
            prompt: format!("Q{id}"),
            topic: String::new(),
            answer: format!("A{id}"),
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn open_session_partitions_stored_catalog() {
        let service = QuestionBankService::new(
            Arc::new(InMemoryRepository::new()),
            SessionSettings::default(),
        );
        service
            .import(&[
                build_question(1, Category::Easy),
                build_question(2, Category::Easy),
                build_question(1, Category::Hard),
            ])
            .await
            .unwrap();

        let session = service.open_session().await.unwrap();

        assert_eq!(session.counts(Category::Easy).unwrap().total, 2);
        assert_eq!(session.counts(Category::Medium).unwrap().total, 0);
        assert_eq!(session.counts(Category::Hard).unwrap().total, 1);
    }

    #[tokio::test]
    async fn sessions_do_not_share_usage() {
        let service = QuestionBankService::new(
            Arc::new(InMemoryRepository::new()),
            SessionSettings::new(1, [Category::Easy]).unwrap(),
        );
        service
            .import(&[build_question(1, Category::Easy), build_question(2, Category::Easy)])
            .await
            .unwrap();

        let mut first = service.open_session().await.unwrap();
        let second = service.open_session().await.unwrap();
        first.draw(Category::Easy).unwrap();

        assert_eq!(first.counts(Category::Easy).unwrap().remaining, 1);
        assert_eq!(second.counts(Category::Easy).unwrap().remaining, 2);
    }

    #[test]
    fn session_from_imported_rows_keeps_file_order() {
        let table = "\
Question Number,Interview Question,Topic,Answer,Difficulty
5,What is a VLAN?,Switching,A broadcast domain.,Easy
7,What is OSPF?,Routing,A link-state protocol.,Hard
2,What is ARP?,Addressing,Maps IP to MAC.,easy
9,What is NAT?,Addressing,Address translation.,EASY
";
        let report = parse_questions(table.as_bytes()).unwrap();
        let service = QuestionBankService::new(
            Arc::new(InMemoryRepository::new()),
            SessionSettings::default(),
        );

        let mut session = service.open_session_from(&report.questions).unwrap();

        let pool_ids: Vec<u64> = session
            .pool(Category::Easy)
            .unwrap()
            .iter()
            .map(|q| q.id().value())
            .collect();
        assert_eq!(pool_ids, vec![5, 2, 9]);

        let remainder = session.draw_n(Category::Easy, 4).unwrap();
        let batch_ids: Vec<u64> = remainder.questions.iter().map(|q| q.id().value()).collect();
        assert_eq!(batch_ids, vec![5, 2, 9]);
    }

    #[test]
    fn repeated_id_fails_to_open() {
        let service = QuestionBankService::new(
            Arc::new(InMemoryRepository::new()),
            SessionSettings::default(),
        );
        let err = service
            .open_session_from(&[
                build_question(3, Category::Medium),
                build_question(3, Category::Medium),
            ])
            .unwrap_err();
        assert!(matches!(
            err,
            QuestionBankError::Session(crate::SessionError::DuplicateQuestion { .. })
        ));
    }
}
