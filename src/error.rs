use thiserror::Error;

/// Misuse of a [`crate::Context`] detected when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// No strategy was installed, usually because `Policy::configure` was skipped.
    #[error("sort strategy has not been set")]
    StrategyNotSet,

    /// No date sequence was handed to the context before sorting.
    #[error("dates have not been set")]
    DatesNotSet,
}
