//! The traversal engine.
//!
//! A [`Game`] owns the scenario, the player and the save store. Each step
//! shows the current move, offers the available ways, applies the chosen
//! one and writes a checkpoint. The run ends at a terminal move, at a dead
//! end, or when the player aborts the prompt.

use cr_core::{AchievementTable, Move, MoveId, Player, Scenario, Way, WayId};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::save::{SaveRecord, SaveStore};
use crate::sink::{GameEvent, Input, PresentationSink};
use crate::text::{self, TextResolver, TextTable};

/// Everything a game author supplies: the story graph, its achievements
/// and its texts.
#[derive(Debug, Clone)]
pub struct GameDefinition {
    /// The story graph.
    pub scenario: Scenario,
    /// Achievements that ways may grant.
    pub achievements: AchievementTable,
    /// Texts for moves, ways, achievements and engine messages.
    pub texts: TextTable,
}

impl GameDefinition {
    /// A definition with no achievements and the built-in texts.
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            achievements: AchievementTable::new(),
            texts: TextTable::builtin(),
        }
    }

    /// Set the achievement table.
    pub fn with_achievements(mut self, achievements: AchievementTable) -> Self {
        self.achievements = achievements;
        self
    }

    /// Merge game texts over the current ones.
    pub fn with_texts<K, V>(mut self, texts: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.texts = self.texts.with_texts(texts);
        self
    }

    /// Achievement IDs used by ways but missing from the table.
    pub fn unregistered_achievements(&self) -> Vec<&str> {
        self.achievements
            .unregistered(self.scenario.achievement_refs())
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// A terminal move was shown.
    Ending,
    /// A non-terminal move had no available way.
    DeadEnd,
    /// The player closed the input or interrupted the prompt.
    Interrupted,
}

/// Where the engine stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineState {
    /// Waiting for a choice at this move.
    AwaitingChoice(MoveId),
    /// The run is over.
    Finished(FinishReason),
}

/// The result of a successful choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The way taken.
    pub way: WayId,
    /// The new current move.
    pub to: MoveId,
    /// Notification texts for achievements earned on this way.
    pub new_achievements: Vec<String>,
}

/// A running game.
#[derive(Debug)]
pub struct Game {
    definition: GameDefinition,
    texts: Box<dyn TextResolver>,
    player: Player,
    store: SaveStore,
    current: MoveId,
    finished: Option<FinishReason>,
    finalized: bool,
    resumed: bool,
}

impl Game {
    /// Set up a run, resuming from the checkpoint if it is usable.
    ///
    /// A checkpoint that names a move the scenario no longer has is ignored
    /// and the run starts at the entry move with `player` untouched.
    pub fn new(mut definition: GameDefinition, mut player: Player, config: GameConfig) -> Self {
        if let Some(path) = &config.texts_path {
            definition.texts = std::mem::take(&mut definition.texts).with_override_file(path);
        }

        let unregistered = definition.unregistered_achievements();
        if !unregistered.is_empty() {
            warn!(?unregistered, "scenario grants achievements missing from the table");
        }

        let texts: Box<dyn TextResolver> = Box::new(definition.texts.clone());

        let store = SaveStore::new(config.save_path);
        if config.fresh
            && let Err(e) = store.delete()
        {
            warn!("could not discard old checkpoint: {e}");
        }

        let entry = definition.scenario.entry_id().clone();
        let (current, resumed) = match store.load() {
            Some(record) if definition.scenario.contains(record.current_move.as_str()) => {
                player.import_save_data(&record.player);
                info!(current_move = %record.current_move, saved_at = %record.saved_at, "resuming from checkpoint");
                (record.current_move, true)
            }
            Some(record) => {
                warn!(current_move = %record.current_move, "checkpoint refers to an unknown move; starting over");
                (entry, false)
            }
            None => (entry, false),
        };

        Self {
            definition,
            texts,
            player,
            store,
            current,
            finished: None,
            finalized: false,
            resumed,
        }
    }

    /// Resolve texts through `resolver` instead of the definition's table.
    pub fn with_text_resolver(mut self, resolver: impl TextResolver + 'static) -> Self {
        self.texts = Box::new(resolver);
        self
    }

    /// The game definition.
    pub fn definition(&self) -> &GameDefinition {
        &self.definition
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player, for drivers with custom rules.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The save store.
    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    /// Whether the run was restored from a checkpoint.
    pub fn resumed(&self) -> bool {
        self.resumed
    }

    /// Current engine state.
    pub fn state(&self) -> EngineState {
        match self.finished {
            Some(reason) => EngineState::Finished(reason),
            None => EngineState::AwaitingChoice(self.current.clone()),
        }
    }

    /// The current move.
    pub fn current_move(&self) -> &Move {
        self.definition
            .scenario
            .get(self.current.as_str())
            .unwrap_or_else(|| self.definition.scenario.entry())
    }

    /// Ways the player may take from the current move, in display order.
    pub fn available_ways(&self) -> Vec<&Way> {
        self.current_move().available_ways(&self.player).collect()
    }

    /// Resolve a text key, falling back to the key itself.
    pub fn text(&self, key: &str) -> String {
        self.texts.resolve(key, None)
    }

    /// Grant an achievement.
    ///
    /// Returns the notification text when the achievement is registered and
    /// earned for the first time; unregistered IDs are ignored.
    pub fn grant_achievement(&mut self, id: &str) -> Option<String> {
        let Some(key) = self.definition.achievements.text_key(id) else {
            debug!(achievement = id, "ignoring unregistered achievement");
            return None;
        };
        let name = self.texts.resolve(key, None);
        if !self.player.add_achievement(id) {
            return None;
        }
        info!(achievement = id, "achievement earned");
        let template = self.text(text::NEW_ACHIEVEMENT);
        Some(template.replacen("{}", &name, 1))
    }

    /// Take the way numbered `input` (1-based, among the available ways).
    ///
    /// Invalid input returns [`EngineError::InvalidChoice`] and changes
    /// nothing. On success the way's achievements and effects are applied,
    /// the destination becomes current and a checkpoint is written.
    pub fn choose(&mut self, input: &str) -> EngineResult<Transition> {
        if self.finished.is_some() {
            return Err(EngineError::Finished);
        }

        let input = input.trim();
        let way = {
            let ways = self.available_ways();
            input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| ways.get(i))
                .map(|way| (*way).clone())
        }
        .ok_or_else(|| EngineError::InvalidChoice(input.to_string()))?;

        let new_achievements = way
            .achievements
            .iter()
            .filter_map(|id| self.grant_achievement(id))
            .collect();
        way.apply_effects(&mut self.player);

        debug!(way = %way.id, from = %self.current, to = %way.to, "way taken");
        self.current = way.to.clone();
        self.checkpoint();

        Ok(Transition {
            way: way.id,
            to: way.to,
            new_achievements,
        })
    }

    /// Write the current position to the save file. Failures are logged only.
    fn checkpoint(&self) {
        let record = SaveRecord::new(self.player.export_save_data(), self.current.clone());
        if let Err(e) = self.store.save(&record) {
            warn!(path = %self.store.path().display(), "failed to write checkpoint: {e}");
        }
    }

    fn finish(&mut self, reason: FinishReason) -> EngineState {
        debug!(?reason, current_move = %self.current, "run finished");
        self.finished = Some(reason);
        EngineState::Finished(reason)
    }

    /// Run one step: show the current move, then either finish or read
    /// choices until one is valid or input stops.
    pub fn step(&mut self, sink: &mut impl PresentationSink) -> EngineResult<EngineState> {
        if let Some(reason) = self.finished {
            return Ok(EngineState::Finished(reason));
        }

        let (text_key, is_end) = {
            let mv = self.current_move();
            (mv.text_key.clone(), mv.is_end)
        };
        sink.emit(GameEvent::Move(self.text(&text_key)))?;
        if is_end {
            return Ok(self.finish(FinishReason::Ending));
        }

        let way_texts: Vec<String> = self
            .available_ways()
            .iter()
            .map(|way| self.text(&way.text_key))
            .collect();
        if way_texts.is_empty() {
            sink.emit(GameEvent::NoWaysAvailable(self.text(text::NO_WAYS_AVAILABLE)))?;
            return Ok(self.finish(FinishReason::DeadEnd));
        }
        for (i, text) in way_texts.into_iter().enumerate() {
            sink.emit(GameEvent::Way { index: i + 1, text })?;
        }

        loop {
            sink.emit(GameEvent::Prompt(self.text(text::YOUR_WAY_PROMPT)))?;
            match sink.read_line()? {
                Input::Line(line) => match self.choose(&line) {
                    Ok(transition) => {
                        for note in transition.new_achievements {
                            sink.emit(GameEvent::NewAchievement(note))?;
                        }
                        return Ok(self.state());
                    }
                    Err(EngineError::InvalidChoice(_)) => {
                        sink.emit(GameEvent::InvalidChoice(self.text(text::ENTER_VALID_WAY)))?;
                    }
                    Err(e) => return Err(e),
                },
                Input::Closed | Input::Interrupted => {
                    info!("input stopped; keeping the last checkpoint");
                    return Ok(self.finish(FinishReason::Interrupted));
                }
            }
        }
    }

    /// Play until the run finishes, then finalize unless it was interrupted.
    pub fn run(&mut self, sink: &mut impl PresentationSink) -> EngineResult<FinishReason> {
        loop {
            if let EngineState::Finished(reason) = self.step(sink)? {
                self.finalize(sink)?;
                return Ok(reason);
            }
        }
    }

    /// Show the closing texts and delete the checkpoint.
    ///
    /// Runs at most once, and only after a terminal move or dead end; an
    /// interrupted run keeps its checkpoint. A checkpoint that cannot be
    /// removed is logged only.
    pub fn finalize(&mut self, sink: &mut impl PresentationSink) -> EngineResult<()> {
        if self.finalized
            || !matches!(
                self.finished,
                Some(FinishReason::Ending | FinishReason::DeadEnd)
            )
        {
            return Ok(());
        }
        self.finalized = true;

        sink.emit(GameEvent::GameOver(self.text(text::GAME_OVER)))?;
        let credits = self.texts.resolve(text::CREDITS, Some(""));
        if !credits.is_empty() {
            sink.emit(GameEvent::Credits(credits))?;
        }
        if let Err(e) = self.store.delete() {
            warn!(path = %self.store.path().display(), "failed to remove checkpoint: {e}");
        }
        info!("run complete");
        Ok(())
    }
}
