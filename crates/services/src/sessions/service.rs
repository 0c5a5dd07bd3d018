use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use interview_core::model::{Category, Question};
use interview_core::{CategoryPool, SessionSettings, UsageTracker, sampler};

use super::batch::Batch;
use super::progress::UsageCounts;
use crate::error::SessionError;

//
// ─── CATEGORY STATE ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
struct CategoryState {
    pool: CategoryPool,
    tracker: UsageTracker,
}

impl CategoryState {
    fn counts(&self) -> UsageCounts {
        let total = self.pool.len();
        UsageCounts {
            remaining: total - self.tracker.used_count(),
            total,
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory interview session: one pool and one usage tracker per category.
///
/// Categories are independent; drawing from or resetting one never touches
/// another. Operations take `&mut self`, so a caller sharing a session across
/// threads has to put it behind its own lock.
pub struct InterviewSession {
    batch_size: usize,
    states: BTreeMap<Category, CategoryState>,
}

impl InterviewSession {
    /// Partition `questions` into the categories named by `settings`.
    ///
    /// Each pool keeps the order of `questions`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::DuplicateQuestion` if an id repeats within a
    /// configured category.
    pub fn new(questions: &[Question], settings: &SessionSettings) -> Result<Self, SessionError> {
        let states = settings
            .categories()
            .iter()
            .map(|&category| -> Result<(Category, CategoryState), SessionError> {
                let state = CategoryState {
                    pool: CategoryPool::from_questions(category, questions)?,
                    tracker: UsageTracker::new(),
                };
                Ok((category, state))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self {
            batch_size: settings.batch_size(),
            states,
        })
    }

    /// Batch size used by [`InterviewSession::draw`].
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Configured categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.states.keys().copied()
    }

    /// The fixed pool of a category.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCategory` if the category is not configured.
    pub fn pool(&self, category: Category) -> Result<&CategoryPool, SessionError> {
        self.state(category).map(|state| &state.pool)
    }

    /// Draw a batch of the configured size with a fresh thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCategory` if the category is not configured.
    pub fn draw(&mut self, category: Category) -> Result<Batch, SessionError> {
        self.draw_n(category, self.batch_size)
    }

    /// Draw up to `n` unseen questions from `category`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCategory` for an unconfigured category and
    /// `SessionError::InvalidBatchSize` when `n` is zero.
    pub fn draw_n(&mut self, category: Category, n: usize) -> Result<Batch, SessionError> {
        let mut rng = rand::rng();
        self.draw_with_rng(category, n, &mut rng)
    }

    /// Draw with a caller-supplied random source.
    ///
    /// Fewer than `n` unseen questions are returned as-is and stay unused, so
    /// repeated draws keep returning the same remainder until a reset.
    ///
    /// # Errors
    ///
    /// Same as [`InterviewSession::draw_n`].
    pub fn draw_with_rng<R>(
        &mut self,
        category: Category,
        n: usize,
        rng: &mut R,
    ) -> Result<Batch, SessionError>
    where
        R: Rng + ?Sized,
    {
        let state = self.state_mut(category)?;
        let outcome = sampler::draw(&state.pool, &mut state.tracker, n, rng)?;

        debug!(
            %category,
            requested = n,
            drawn = outcome.questions.len(),
            consumed = outcome.consumed,
            remaining = state.counts().remaining,
            "drew batch"
        );

        Ok(Batch {
            category,
            questions: outcome.questions,
            consumed: outcome.consumed,
        })
    }

    /// Draw the configured batch size from a raw category label.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCategory` if the label does not name a
    /// configured category.
    pub fn draw_label(&mut self, label: &str) -> Result<Batch, SessionError> {
        let category = parse_label(label)?;
        self.draw(category)
    }

    /// Mark every question of `category` as unseen again. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCategory` if the category is not configured.
    pub fn reset(&mut self, category: Category) -> Result<(), SessionError> {
        let state = self.state_mut(category)?;
        state.tracker.reset();
        debug!(%category, total = state.pool.len(), "reset category");
        Ok(())
    }

    /// Reset a category named by a raw label.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCategory` if the label does not name a
    /// configured category.
    pub fn reset_label(&mut self, label: &str) -> Result<(), SessionError> {
        let category = parse_label(label)?;
        self.reset(category)
    }

    /// Remaining and total questions of a category.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCategory` if the category is not configured.
    pub fn counts(&self, category: Category) -> Result<UsageCounts, SessionError> {
        self.state(category).map(CategoryState::counts)
    }

    fn state(&self, category: Category) -> Result<&CategoryState, SessionError> {
        self.states
            .get(&category)
            .ok_or_else(|| SessionError::InvalidCategory(category.to_string()))
    }

    fn state_mut(&mut self, category: Category) -> Result<&mut CategoryState, SessionError> {
        self.states
            .get_mut(&category)
            .ok_or_else(|| SessionError::InvalidCategory(category.to_string()))
    }
}

fn parse_label(label: &str) -> Result<Category, SessionError> {
    label
        .parse()
        .map_err(|_| SessionError::InvalidCategory(label.trim().to_string()))
}

impl fmt::Debug for InterviewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InterviewSession");
        s.field("batch_size", &self.batch_size);
        for (category, state) in &self.states {
            s.field(category.as_str(), &state.counts());
        }
        s.finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::model::{QuestionDraft, QuestionId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build_question(id: u64, category: Category) -> Question {
        QuestionDraft {
            id: QuestionId::new(id),
            category,
            prompt: format!("Q{id}"),
            topic: "Topic".into(),
            answer: format!("A{id}"),
        }
        .validate()
        .unwrap()
    }

    fn build_session() -> InterviewSession {
        let mut questions: Vec<Question> =
            (1..=7).map(|id| build_question(id, Category::Easy)).collect();
        questions.extend((1..=4).map(|id| build_question(id, Category::Medium)));
        InterviewSession::new(&questions, &SessionSettings::default()).unwrap()
    }

    #[test]
    fn session_builds_one_pool_per_category() {
        let session = build_session();
        assert_eq!(session.counts(Category::Easy).unwrap().total, 7);
        assert_eq!(session.counts(Category::Medium).unwrap().total, 4);
        assert_eq!(session.counts(Category::Hard).unwrap().total, 0);
        assert_eq!(
            session.categories().collect::<Vec<_>>(),
            vec![Category::Easy, Category::Medium, Category::Hard]
        );
    }

    #[test]
    fn unconfigured_category_is_invalid() {
        let settings = SessionSettings::new(3, [Category::Easy]).unwrap();
        let mut session = InterviewSession::new(&[build_question(1, Category::Hard)], &settings).unwrap();

        assert_eq!(
            session.draw(Category::Hard).unwrap_err(),
            SessionError::InvalidCategory("hard".into())
        );
        assert!(session.reset(Category::Hard).is_err());
        assert!(session.counts(Category::Hard).is_err());
    }

    #[test]
    fn unknown_label_is_invalid_category() {
        let mut session = build_session();
        assert_eq!(
            session.draw_label(" expert ").unwrap_err(),
            SessionError::InvalidCategory("expert".into())
        );
        assert!(session.reset_label("").is_err());
        assert_eq!(session.draw_label(" EASY ").unwrap().len(), 3);
    }

    #[test]
    fn zero_batch_size_leaves_state_alone() {
        let mut session = build_session();
        let err = session.draw_n(Category::Easy, 0).unwrap_err();
        assert_eq!(err, SessionError::InvalidBatchSize(0));
        assert_eq!(
            session.counts(Category::Easy).unwrap(),
            UsageCounts {
                remaining: 7,
                total: 7
            }
        );
    }

    #[test]
    fn reset_only_touches_its_category() {
        let mut session = build_session();
        let mut rng = StdRng::seed_from_u64(42);
        session.draw_with_rng(Category::Easy, 3, &mut rng).unwrap();
        session.draw_with_rng(Category::Medium, 3, &mut rng).unwrap();

        session.reset(Category::Medium).unwrap();

        assert_eq!(session.counts(Category::Medium).unwrap().remaining, 4);
        assert_eq!(session.counts(Category::Easy).unwrap().remaining, 4);
    }

    #[test]
    fn draw_uses_configured_batch_size() {
        let questions: Vec<Question> = (1..=10).map(|id| build_question(id, Category::Hard)).collect();
        let settings = SessionSettings::default().with_batch_size(4).unwrap();
        let mut session = InterviewSession::new(&questions, &settings).unwrap();

        let batch = session.draw(Category::Hard).unwrap();
        assert_eq!(batch.len(), 4);
        assert!(batch.consumed);
        assert_eq!(batch.category, Category::Hard);
        assert_eq!(session.counts(Category::Hard).unwrap().remaining, 6);
    }

    #[test]
    fn duplicate_id_within_category_is_rejected() {
        let questions = vec![
            build_question(1, Category::Easy),
            build_question(1, Category::Easy),
            build_question(2, Category::Easy),
            build_question(3, Category::Easy),
        ];

        let err = InterviewSession::new(&questions, &SessionSettings::default()).unwrap_err();
        assert_eq!(
            err,
            SessionError::DuplicateQuestion {
                category: Category::Easy,
                id: QuestionId::new(1),
            }
        );
    }

    #[test]
    fn duplicate_in_unconfigured_category_is_ignored() {
        let questions = vec![
            build_question(1, Category::Easy),
            build_question(4, Category::Hard),
            build_question(4, Category::Hard),
        ];
        let settings = SessionSettings::new(3, [Category::Easy]).unwrap();

        let session = InterviewSession::new(&questions, &settings).unwrap();
        assert_eq!(session.counts(Category::Easy).unwrap().total, 1);
    }

    #[test]
    fn pools_follow_input_order() {
        let questions = vec![
            build_question(5, Category::Easy),
            build_question(2, Category::Easy),
            build_question(9, Category::Easy),
        ];
        let mut session = InterviewSession::new(&questions, &SessionSettings::default()).unwrap();

        let pool_ids: Vec<u64> = session
            .pool(Category::Easy)
            .unwrap()
            .iter()
            .map(|q| q.id().value())
            .collect();
        assert_eq!(pool_ids, vec![5, 2, 9]);

        let remainder = session.draw_n(Category::Easy, 4).unwrap();
        assert!(!remainder.consumed);
        let batch_ids: Vec<u64> = remainder.questions.iter().map(|q| q.id().value()).collect();
        assert_eq!(batch_ids, vec![5, 2, 9]);
    }

    #[test]
    fn debug_lists_counts_per_category() {
        let session = build_session();
        let rendered = format!("{session:?}");
        assert!(rendered.contains("batch_size: 3"));
        assert!(rendered.contains("easy"));
    }
}
