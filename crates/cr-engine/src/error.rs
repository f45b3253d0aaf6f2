//! Error types for the traversal engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running a game.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Reading or writing a file, or talking to the sink, failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The save record could not be encoded or decoded.
    #[error("save format error: {0}")]
    Json(#[from] serde_json::Error),

    /// The temporary save file could not replace the old one.
    #[error("failed to replace save file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// The save file was written by an incompatible version.
    #[error("save version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Version this build writes.
        expected: u32,
        /// Version found in the file.
        found: u32,
    },

    /// A text override file is not a flat table.
    #[error("invalid text file: {0}")]
    Texts(#[from] toml::de::Error),

    /// The input does not name one of the listed ways.
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    /// The run has already finished.
    #[error("the game is over")]
    Finished,
}
