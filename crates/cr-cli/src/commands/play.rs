use std::path::PathBuf;

use colored::Colorize;
use cr_engine::{FinishReason, Game, GameConfig};
use tracing::debug;

use crate::scenarios;
use crate::terminal::TerminalSink;

pub fn run(name: &str, save: PathBuf, texts: Option<PathBuf>, fresh: bool) -> Result<(), String> {
    let (definition, player) = scenarios::find(name)?.build()?;

    let mut config = GameConfig::default().with_save_path(save).with_fresh(fresh);
    if let Some(path) = texts {
        config = config.with_texts_path(path);
    }

    let mut game = Game::new(definition, player, config);
    if game.resumed() {
        println!("  {} saved game\n", "Resuming".bold());
    }

    let mut sink = TerminalSink::new().map_err(|e| format!("failed to set up terminal: {e}"))?;
    let reason = game.run(&mut sink).map_err(|e| e.to_string())?;
    debug!(?reason, "session ended");

    if reason == FinishReason::Interrupted && game.store().exists() {
        println!("  Progress saved to {}", game.store().path().display());
    }
    Ok(())
}
