//! Configuration for a game run.

use std::path::PathBuf;

/// Where the save file lives unless configured otherwise.
pub const DEFAULT_SAVE_PATH: &str = "./game.save";

/// Configuration for a game run.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Path of the save file.
    pub save_path: PathBuf,
    /// Optional TOML file overriding built-in and game texts.
    pub texts_path: Option<PathBuf>,
    /// Discard any existing checkpoint before starting.
    pub fresh: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            texts_path: None,
            fresh: false,
        }
    }
}

impl GameConfig {
    /// Set the save file path.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Set the text override file.
    pub fn with_texts_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.texts_path = Some(path.into());
        self
    }

    /// Start from the entry move even if a checkpoint exists.
    pub fn with_fresh(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.save_path, PathBuf::from("./game.save"));
        assert!(cfg.texts_path.is_none());
        assert!(!cfg.fresh);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_save_path("/tmp/story.save")
            .with_texts_path("texts.toml")
            .with_fresh(true);
        assert_eq!(cfg.save_path, PathBuf::from("/tmp/story.save"));
        assert_eq!(cfg.texts_path, Some(PathBuf::from("texts.toml")));
        assert!(cfg.fresh);
    }
}
