/// Remaining/total accounting for one category, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageCounts {
    pub remaining: usize,
    pub total: usize,
}

impl UsageCounts {
    /// Number of questions drawn since the last reset.
    #[must_use]
    pub fn used(&self) -> usize {
        self.total - self.remaining
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
