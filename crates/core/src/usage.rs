use std::collections::HashSet;

use crate::model::QuestionId;

/// Ids already drawn from one category since the last reset.
///
/// Only the sampler adds ids, and only ids taken from the matching pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageTracker {
    used: HashSet<QuestionId>,
}

impl UsageTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_used(&self, id: QuestionId) -> bool {
        self.used.contains(&id)
    }

    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Forget every drawn id. Idempotent.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    pub(crate) fn mark_used(&mut self, ids: impl IntoIterator<Item = QuestionId>) {
        self.used.extend(ids);
    }
}
