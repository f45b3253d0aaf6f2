//! Player state: earned achievements and schema-declared attributes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The value of a player attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// A true/false flag.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A text value.
    Text(String),
}

impl AttributeValue {
    /// Whether both values are of the same variant.
    pub fn same_kind(&self, other: &AttributeValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// The flag value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is an `Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Declaration of one player attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSpec {
    /// Attribute name.
    pub name: String,
    /// Initial value; also fixes the attribute's type.
    pub default: AttributeValue,
    /// Whether the attribute is written to save files.
    pub persisted: bool,
}

/// The attributes a concrete game's player carries.
///
/// The default schema declares nothing; a game adds its own attributes and
/// marks which of them survive a save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSchema {
    attributes: Vec<AttributeSpec>,
}

impl PlayerSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an attribute that is saved with the player.
    pub fn persisted(self, name: impl Into<String>, default: impl Into<AttributeValue>) -> Self {
        self.declare(name.into(), default.into(), true)
    }

    /// Declare an attribute that lives only for the current process.
    pub fn transient(self, name: impl Into<String>, default: impl Into<AttributeValue>) -> Self {
        self.declare(name.into(), default.into(), false)
    }

    fn declare(mut self, name: String, default: AttributeValue, persisted: bool) -> Self {
        let spec = AttributeSpec {
            name,
            default,
            persisted,
        };
        match self.attributes.iter_mut().find(|a| a.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.attributes.push(spec),
        }
        self
    }

    /// Look up an attribute declaration.
    pub fn get(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// All declarations, in declaration order.
    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }
}

/// Saved form of a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Earned achievement IDs, in the order they were earned.
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Values of persisted attributes.
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

/// The player's state during a run.
#[derive(Debug, Clone, Default)]
pub struct Player {
    schema: PlayerSchema,
    achievements: Vec<String>,
    values: BTreeMap<String, AttributeValue>,
}

impl Player {
    /// Create a player with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a player whose attributes start at the schema defaults.
    pub fn with_schema(schema: PlayerSchema) -> Self {
        let values = schema
            .attributes()
            .iter()
            .map(|a| (a.name.clone(), a.default.clone()))
            .collect();
        Self {
            schema,
            achievements: Vec::new(),
            values,
        }
    }

    /// The attribute schema.
    pub fn schema(&self) -> &PlayerSchema {
        &self.schema
    }

    /// Record an achievement. Returns true only the first time.
    pub fn add_achievement(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.has_achievement(&id) {
            return false;
        }
        self.achievements.push(id);
        true
    }

    /// Check if an achievement has been earned.
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }

    /// Earned achievements, in the order they were earned.
    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    /// Current value of an attribute.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    /// Set an attribute.
    ///
    /// Returns false (and changes nothing) if the attribute is not declared
    /// or the value has a different type than the declared default.
    pub fn set(&mut self, name: &str, value: impl Into<AttributeValue>) -> bool {
        let value = value.into();
        match self.schema.get(name) {
            Some(spec) if spec.default.same_kind(&value) => {
                self.values.insert(name.to_string(), value);
                true
            }
            _ => false,
        }
    }

    /// Reset an attribute to its declared default.
    pub fn reset(&mut self, name: &str) -> bool {
        match self.schema.get(name) {
            Some(spec) => {
                self.values.insert(name.to_string(), spec.default.clone());
                true
            }
            None => false,
        }
    }

    /// A boolean attribute, false when unset or not a flag.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(AttributeValue::as_bool).unwrap_or(false)
    }

    /// An integer attribute.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(AttributeValue::as_integer)
    }

    /// Snapshot of everything that should survive a save.
    pub fn export_save_data(&self) -> PlayerRecord {
        let attributes = self
            .schema
            .attributes()
            .iter()
            .filter(|a| a.persisted)
            .filter_map(|a| self.values.get(&a.name).map(|v| (a.name.clone(), v.clone())))
            .collect();
        PlayerRecord {
            achievements: self.achievements.clone(),
            attributes,
        }
    }

    /// Restore from a saved record.
    ///
    /// Only persisted attributes declared by this player's schema are
    /// applied; unknown names and mismatched types are skipped.
    pub fn import_save_data(&mut self, record: &PlayerRecord) {
        self.achievements.clear();
        for id in &record.achievements {
            self.add_achievement(id.as_str());
        }

        for (name, value) in &record.attributes {
            let persisted = self.schema.get(name).is_some_and(|a| a.persisted);
            if !persisted || !self.set(name, value.clone()) {
                debug!(attribute = %name, "ignoring saved attribute");
            }
        }
    }
}
