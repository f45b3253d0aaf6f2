//! Traversal engine for Crossroads scenarios.
//!
//! Drives a [`Game`] over a [`cr_core::Scenario`]: filters ways by their
//! conditions, applies achievements and effects, writes a checkpoint after
//! every step and removes it when the run ends. Text lookup and output go
//! through the [`TextResolver`] and [`PresentationSink`] seams so a driver
//! decides how things look.

/// Run configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// The traversal engine.
pub mod game;
/// Save file handling.
pub mod save;
/// Events and input exchanged with the presentation layer.
pub mod sink;
/// Text lookup tables.
pub mod text;

pub use config::GameConfig;
pub use error::{EngineError, EngineResult};
pub use game::{EngineState, FinishReason, Game, GameDefinition, Transition};
pub use save::{SaveRecord, SaveStore};
pub use sink::{GameEvent, Input, PresentationSink, ScriptedSink};
pub use text::{TextResolver, TextTable};
