use interview_core::model::{Category, Question};

/// Questions handed out by one draw, in the order they were picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub category: Category,
    pub questions: Vec<Question>,
    /// Whether the draw recorded these questions as used.
    ///
    /// False for the short remainder of a nearly exhausted category, which
    /// keeps being returned until the category is reset.
    pub consumed: bool,
}

impl Batch {
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
