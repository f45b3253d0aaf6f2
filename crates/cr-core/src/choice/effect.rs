//! Effects that modify player state after a way is chosen.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::player::{AttributeValue, Player};

/// An effect applied when a way is taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Set an attribute.
    Set {
        /// Attribute name.
        name: String,
        /// Value to set.
        value: AttributeValue,
    },
    /// Add to an integer attribute.
    Increment {
        /// Attribute name.
        name: String,
        /// Amount to add (may be negative).
        by: i64,
    },
    /// Reset an attribute to its declared default.
    Reset {
        /// Attribute name.
        name: String,
    },
}

impl Effect {
    /// Shorthand for setting a boolean attribute to true.
    pub fn set_flag(name: impl Into<String>) -> Self {
        Self::Set {
            name: name.into(),
            value: AttributeValue::Bool(true),
        }
    }

    /// Apply the effect. Effects on undeclared or mistyped attributes do nothing.
    pub fn apply(&self, player: &mut Player) {
        let applied = match self {
            Effect::Set { name, value } => player.set(name, value.clone()),
            Effect::Increment { name, by } => match player.integer(name) {
                Some(current) => player.set(name, current.saturating_add(*by)),
                None => false,
            },
            Effect::Reset { name } => player.reset(name),
        };
        if !applied {
            debug!(effect = ?self, "effect had no target attribute");
        }
    }
}
