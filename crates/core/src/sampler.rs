use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::model::Question;
use crate::pool::CategoryPool;
use crate::usage::UsageTracker;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SamplerError {
    #[error("batch size must be > 0, got {0}")]
    InvalidBatchSize(usize),
}

//
// ─── DRAW ──────────────────────────────────────────────────────────────────────
//

/// Questions produced by one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Drawn questions in random order.
    pub questions: Vec<Question>,
    /// False when fewer than the requested number were unseen: the remainder
    /// is handed out but stays eligible, so the next draw returns it again.
    pub consumed: bool,
}

/// Draw up to `n` unseen questions from `pool`.
///
/// - With at least `n` unseen questions, picks a uniformly random subset of
///   size `n` and records it in `tracker`.
/// - With fewer than `n` unseen questions, returns all of them and leaves
///   `tracker` untouched.
///
/// # Errors
///
/// Returns `SamplerError::InvalidBatchSize` when `n` is zero.
pub fn draw<R>(
    pool: &CategoryPool,
    tracker: &mut UsageTracker,
    n: usize,
    rng: &mut R,
) -> Result<DrawOutcome, SamplerError>
where
    R: Rng + ?Sized,
{
    if n == 0 {
        return Err(SamplerError::InvalidBatchSize(n));
    }

    let mut unseen: Vec<&Question> = pool.iter().filter(|q| !tracker.is_used(q.id())).collect();

    if unseen.len() < n {
        return Ok(DrawOutcome {
            questions: unseen.into_iter().cloned().collect(),
            consumed: false,
        });
    }

    unseen.as_mut_slice().shuffle(rng);
    unseen.truncate(n);

    let questions: Vec<Question> = unseen.into_iter().cloned().collect();
    tracker.mark_used(questions.iter().map(Question::id));

    Ok(DrawOutcome {
        questions,
        consumed: true,
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
