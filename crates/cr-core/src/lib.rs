//! Core types for Crossroads: the scenario graph, player state, and the
//! conditions and effects attached to ways.
//!
//! This crate has no I/O. A [`Scenario`] is built once from declared moves
//! and never changes; a [`Player`] carries everything a run mutates.

/// Achievement registry.
pub mod achievement;
/// Conditions and effects attached to ways.
pub mod choice;
/// Error types used throughout the crate.
pub mod error;
/// Player state and its saved form.
pub mod player;
/// Moves, ways and the scenario graph.
pub mod scenario;

/// Re-export the achievement registry.
pub use achievement::AchievementTable;
/// Re-export condition and effect types.
pub use choice::{Condition, Effect};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export player types.
pub use player::{AttributeValue, Player, PlayerRecord, PlayerSchema};
/// Re-export scenario types.
pub use scenario::{Move, MoveId, Scenario, ScenarioBuilder, Way, WayId};
