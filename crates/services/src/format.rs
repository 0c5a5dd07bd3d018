//! Plain-text rendering of batches and counters for the operator surface.

use interview_core::model::Category;

use crate::sessions::{Batch, UsageCounts};

/// Render a batch in draw order.
///
/// Each question becomes a `Q<id>:` line, a `Topic:` line and an `A:` line,
/// followed by a blank line. An empty batch renders as an empty string.
#[must_use]
pub fn format_batch(batch: &Batch) -> String {
    batch.questions.iter().fold(String::new(), |mut out, question| {
        out.push_str(&format!(
            "Q{}: {}\nTopic: {}\nA: {}\n\n",
            question.id(),
            question.prompt(),
            question.topic(),
            question.answer()
        ));
        out
    })
}

/// Counter line such as `Easy Qs: 4/7`.
#[must_use]
pub fn format_counts(category: Category, counts: UsageCounts) -> String {
    format!("{} Qs: {}/{}", category.label(), counts.remaining, counts.total)
}

/// Heading shown above a batch, such as `Difficulty: Hard`.
#[must_use]
pub fn format_heading(category: Category) -> String {
    format!("Difficulty: {}", category.label())
}
