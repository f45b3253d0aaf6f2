//! The boundary between the engine and whatever shows the game.
//!
//! The engine only emits [`GameEvent`]s carrying resolved text and reads
//! lines back; formatting belongs to the sink.

use std::collections::VecDeque;
use std::io;

/// Something the player should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Text of the current move.
    Move(String),
    /// One available way, numbered from 1.
    Way {
        /// The number the player types to pick this way.
        index: usize,
        /// Text of the way.
        text: String,
    },
    /// Prompt shown before reading a choice.
    Prompt(String),
    /// The last input named no listed way.
    InvalidChoice(String),
    /// A non-terminal move had no available way.
    NoWaysAvailable(String),
    /// An achievement was earned for the first time.
    NewAchievement(String),
    /// The run finished.
    GameOver(String),
    /// Closing credits.
    Credits(String),
}

/// Result of asking the player for input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of input, without the trailing newline.
    Line(String),
    /// The input stream ended.
    Closed,
    /// The player interrupted the prompt.
    Interrupted,
}

/// Shows events to the player and collects choices.
pub trait PresentationSink {
    /// Show one event.
    fn emit(&mut self, event: GameEvent) -> io::Result<()>;

    /// Block until the player enters a line or aborts.
    fn read_line(&mut self) -> io::Result<Input>;
}

/// A sink that replays canned input and records every event.
///
/// Once the input runs out it reports [`Input::Closed`], or
/// [`Input::Interrupted`] if built with [`ScriptedSink::interrupt_at_end`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedSink {
    inputs: VecDeque<String>,
    events: Vec<GameEvent>,
    interrupt_at_end: bool,
}

impl ScriptedSink {
    /// Create a sink that answers prompts with `inputs`, in order.
    pub fn new<S: Into<String>>(inputs: impl IntoIterator<Item = S>) -> Self {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Report an interrupt instead of end-of-input when the script runs out.
    pub fn interrupt_at_end(mut self) -> Self {
        self.interrupt_at_end = true;
        self
    }

    /// Every event emitted so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Texts of the moves shown so far.
    pub fn moves(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Move(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Count events matching a predicate.
    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Inputs not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl PresentationSink for ScriptedSink {
    fn emit(&mut self, event: GameEvent) -> io::Result<()> {
        self.events.push(event);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Input> {
        Ok(match self.inputs.pop_front() {
            Some(line) => Input::Line(line),
            None if self.interrupt_at_end => Input::Interrupted,
            None => Input::Closed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_inputs_then_closes() {
        let mut sink = ScriptedSink::new(["1", "2"]);
        assert_eq!(sink.read_line().unwrap(), Input::Line("1".to_string()));
        assert_eq!(sink.read_line().unwrap(), Input::Line("2".to_string()));
        assert_eq!(sink.read_line().unwrap(), Input::Closed);
    }

    #[test]
    fn interrupts_when_asked() {
        let mut sink = ScriptedSink::new(Vec::<String>::new()).interrupt_at_end();
        assert_eq!(sink.read_line().unwrap(), Input::Interrupted);
    }

    #[test]
    fn records_events() {
        let mut sink = ScriptedSink::default();
        sink.emit(GameEvent::Move("hall".to_string())).unwrap();
        sink.emit(GameEvent::Prompt("?".to_string())).unwrap();
        assert_eq!(sink.moves(), vec!["hall"]);
        assert_eq!(sink.count(|e| matches!(e, GameEvent::Prompt(_))), 1);
    }
}
