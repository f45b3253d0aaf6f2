use crate::scenario::{MoveId, WayId};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or querying a scenario.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The requested move ID is not part of the scenario.
    #[error("move not found: {0}")]
    MoveNotFound(MoveId),

    /// Two declared moves share the same ID.
    #[error("duplicate move id: \"{0}\"")]
    DuplicateMove(MoveId),

    /// The entry move was never declared.
    #[error("entry move not declared: \"{0}\"")]
    UnknownEntry(MoveId),

    /// A reachable way points at a move that was never declared.
    #[error("way \"{way}\" leads to undeclared move \"{target}\"")]
    DanglingWay {
        /// The way holding the broken reference.
        way: WayId,
        /// The missing destination.
        target: MoveId,
    },
}
