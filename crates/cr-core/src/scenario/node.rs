//! Moves and ways.

use serde::{Deserialize, Serialize};

use super::{MoveId, WayId};
use crate::choice::{Condition, Effect};
use crate::player::Player;

/// A node of the scenario graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    /// Unique identifier within the scenario.
    pub id: MoveId,
    /// Text key resolved when the move is shown.
    pub text_key: String,
    /// Outgoing ways, in display order.
    #[serde(default)]
    pub ways: Vec<Way>,
    /// Terminal moves end the run; their ways are never consulted.
    #[serde(default)]
    pub is_end: bool,
}

impl Move {
    /// Create a non-terminal move with no ways yet.
    pub fn new(id: impl Into<MoveId>, text_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text_key: text_key.into(),
            ways: Vec::new(),
            is_end: false,
        }
    }

    /// Create a terminal move.
    pub fn ending(id: impl Into<MoveId>, text_key: impl Into<String>) -> Self {
        Self {
            is_end: true,
            ..Self::new(id, text_key)
        }
    }

    /// Append a way.
    pub fn with_way(mut self, way: Way) -> Self {
        self.ways.push(way);
        self
    }

    /// Ways the player may take right now, in declared order.
    ///
    /// Always empty for a terminal move.
    pub fn available_ways<'a>(&'a self, player: &'a Player) -> impl Iterator<Item = &'a Way> {
        self.ways
            .iter()
            .filter(move |way| !self.is_end && way.is_available(player))
    }
}

/// An edge of the scenario graph: a choice leading to another move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    /// Identifier of the way.
    pub id: WayId,
    /// Text key resolved when the way is listed.
    pub text_key: String,
    /// Destination move.
    pub to: MoveId,
    /// Achievement IDs granted when the way is taken.
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Whether the way is offered at all.
    #[serde(default)]
    pub condition: Condition,
    /// Effects applied after the way is chosen, in order.
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl Way {
    /// Create an always-available way with no side effects.
    pub fn new(
        id: impl Into<WayId>,
        text_key: impl Into<String>,
        to: impl Into<MoveId>,
    ) -> Self {
        Self {
            id: id.into(),
            text_key: text_key.into(),
            to: to.into(),
            achievements: Vec::new(),
            condition: Condition::Always,
            effects: Vec::new(),
        }
    }

    /// Grant an achievement when this way is taken.
    pub fn with_achievement(mut self, id: impl Into<String>) -> Self {
        self.achievements.push(id.into());
        self
    }

    /// Replace the availability condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Add an effect applied after selection.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Evaluate the availability condition.
    pub fn is_available(&self, player: &Player) -> bool {
        self.condition.evaluate(player)
    }

    /// Apply every effect of this way to the player.
    pub fn apply_effects(&self, player: &mut Player) {
        for effect in &self.effects {
            effect.apply(player);
        }
    }
}
