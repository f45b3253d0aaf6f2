//! Terminal presentation: styled output on stdout, choices from stdin.

use std::io::{self, Write};

use colored::Colorize;
use cr_engine::{GameEvent, Input, PresentationSink};
use tokio::runtime::{Builder, Runtime};

/// Prints game events and reads choices, turning Ctrl-C at the prompt into
/// [`Input::Interrupted`].
pub struct TerminalSink {
    out: io::Stdout,
    runtime: Option<Runtime>,
}

impl TerminalSink {
    pub fn new() -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            out: io::stdout(),
            runtime: Some(runtime),
        })
    }
}

impl PresentationSink for TerminalSink {
    fn emit(&mut self, event: GameEvent) -> io::Result<()> {
        let out = &mut self.out;
        match event {
            GameEvent::Move(text) => writeln!(out, "{text}"),
            GameEvent::Way { index, text } => {
                writeln!(out, "{} {text}", format!("[{index}]").bold())
            }
            GameEvent::Prompt(text) => {
                write!(out, "{}", text.bold())?;
                out.flush()
            }
            GameEvent::InvalidChoice(text) => writeln!(out, "{}", text.yellow()),
            GameEvent::NoWaysAvailable(text) | GameEvent::GameOver(text) => {
                writeln!(out, "{}", text.bold())
            }
            GameEvent::NewAchievement(text) => writeln!(out, "{}", text.bold().green()),
            GameEvent::Credits(text) => writeln!(out, "{text}"),
        }
    }

    fn read_line(&mut self) -> io::Result<Input> {
        let Some(runtime) = &self.runtime else {
            return Ok(Input::Closed);
        };

        let input = runtime.block_on(next_line())?;

        if input == Input::Interrupted {
            // The stdin reader is still blocked; don't wait for it.
            if let Some(runtime) = self.runtime.take() {
                runtime.shutdown_background();
            }
            writeln!(self.out)?;
        }
        Ok(input)
    }
}

/// Read one line from stdin, or stop early on Ctrl-C.
async fn next_line() -> io::Result<Input> {
    let read = tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        io::stdin().read_line(&mut line).map(|n| (n, line))
    });

    tokio::select! {
        res = read => {
            let (n, line) = res.map_err(io::Error::other)??;
            if n == 0 {
                Ok(Input::Closed)
            } else {
                Ok(Input::Line(line.trim_end_matches(['\r', '\n']).to_string()))
            }
        }
        sig = tokio::signal::ctrl_c() => {
            sig?;
            Ok(Input::Interrupted)
        }
    }
}
