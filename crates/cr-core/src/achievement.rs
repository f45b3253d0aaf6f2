//! Registered achievements and their display text keys.

/// Maps achievement IDs to text keys, in registration order.
///
/// Only registered achievements can be granted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AchievementTable {
    entries: Vec<(String, String)>,
}

impl AchievementTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an achievement. Re-registering an ID replaces its text key.
    pub fn with(mut self, id: impl Into<String>, text_key: impl Into<String>) -> Self {
        let (id, text_key) = (id.into(), text_key.into());
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = text_key,
            None => self.entries.push((id, text_key)),
        }
        self
    }

    /// Text key of a registered achievement.
    pub fn text_key(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, key)| key.as_str())
    }

    /// Whether the achievement is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.text_key(id).is_some()
    }

    /// Registered `(id, text_key)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, key)| (id.as_str(), key.as_str()))
    }

    /// Number of registered achievements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The IDs from `refs` that are not registered, in input order.
    pub fn unregistered<'a>(&self, refs: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        refs.into_iter().filter(|id| !self.contains(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let table = AchievementTable::new()
            .with("first", "achievement_first")
            .with("second", "achievement_second");

        assert_eq!(table.len(), 2);
        assert_eq!(table.text_key("first"), Some("achievement_first"));
        assert_eq!(table.text_key("third"), None);
    }

    #[test]
    fn re_registering_replaces_key() {
        let table = AchievementTable::new()
            .with("first", "old")
            .with("first", "new");
        assert_eq!(table.len(), 1);
        assert_eq!(table.text_key("first"), Some("new"));
    }

    #[test]
    fn reports_unregistered_refs() {
        let table = AchievementTable::new().with("first", "a");
        assert_eq!(table.unregistered(["first", "ghost"]), vec!["ghost"]);
    }
}
