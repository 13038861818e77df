//! Outcome of best-effort side work.

/// Outcome of an operation that must never fail the request it rides on,
/// such as cache invalidation or releasing an orphaned asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum BestEffort {
    /// The work was performed.
    Completed,
    /// The work was not applicable (e.g. cache disabled).
    Skipped,
    /// The work was attempted and failed; the failure was logged.
    Failed,
}

impl BestEffort {
    /// Whether the work actually ran to completion.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}
