//! Scenario graph: moves (story nodes) connected by ways (choices).

mod graph;
mod node;

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use graph::{Scenario, ScenarioBuilder};
pub use node::{Move, Way};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a move. Unique across a scenario.
    MoveId
);

string_id!(
    /// Identifier of a way.
    WayId
);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn ids_borrow_as_str() {
        let mut map = HashMap::new();
        map.insert(MoveId::new("cellar"), 1);
        assert_eq!(map.get("cellar"), Some(&1));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&MoveId::from("gate")).unwrap();
        assert_eq!(json, "\"gate\"");
        let back: WayId = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(back.as_str(), "open");
    }
}
