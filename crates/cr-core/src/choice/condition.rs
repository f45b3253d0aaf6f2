//! Condition evaluation for ways.

use serde::{Deserialize, Serialize};

use crate::player::{AttributeValue, Player};

/// A condition evaluated against the player's state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Check if a boolean attribute is true.
    Flag {
        /// Attribute name.
        name: String,
    },
    /// Check if an attribute equals a value.
    Equals {
        /// Attribute name.
        name: String,
        /// Expected value.
        value: AttributeValue,
    },
    /// Check if an integer attribute is at least a value.
    AtLeast {
        /// Attribute name.
        name: String,
        /// Inclusive lower bound.
        value: i64,
    },
    /// Check if an achievement has been earned.
    HasAchievement {
        /// Achievement ID.
        id: String,
    },
    /// Logical NOT.
    Not(Box<Condition>),
    /// Logical AND.
    And(Vec<Condition>),
    /// Logical OR.
    Or(Vec<Condition>),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Shorthand for [`Condition::Flag`].
    pub fn flag(name: impl Into<String>) -> Self {
        Self::Flag { name: name.into() }
    }

    /// Shorthand for [`Condition::HasAchievement`].
    pub fn has_achievement(id: impl Into<String>) -> Self {
        Self::HasAchievement { id: id.into() }
    }

    /// Wrap this condition in [`Condition::Not`].
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Evaluate the condition against the player.
    pub fn evaluate(&self, player: &Player) -> bool {
        match self {
            Condition::Flag { name } => player.flag(name),
            Condition::Equals { name, value } => player.get(name).is_some_and(|v| v == value),
            Condition::AtLeast { name, value } => {
                player.integer(name).is_some_and(|n| n >= *value)
            }
            Condition::HasAchievement { id } => player.has_achievement(id),
            Condition::Not(inner) => !inner.evaluate(player),
            Condition::And(conditions) => conditions.iter().all(|c| c.evaluate(player)),
            Condition::Or(conditions) => conditions.iter().any(|c| c.evaluate(player)),
            Condition::Always => true,
        }
    }
}
