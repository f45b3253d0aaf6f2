//! CLI frontend for the Crossroads narrative engine.

mod commands;
mod scenarios;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use cr_engine::config::DEFAULT_SAVE_PATH;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "crossroads",
    about = "Crossroads: play branching text scenarios",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine internals to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a bundled scenario, resuming from its save file if present
    Play {
        /// Scenario name (see `crossroads list`)
        scenario: String,

        /// Save file location
        #[arg(short, long, default_value = DEFAULT_SAVE_PATH)]
        save: PathBuf,

        /// TOML file overriding scenario and engine texts
        #[arg(short, long)]
        texts: Option<PathBuf>,

        /// Ignore and discard any existing save
        #[arg(long)]
        fresh: bool,
    },

    /// Validate a bundled scenario and print its moves
    Check {
        /// Scenario name (see `crossroads list`)
        scenario: String,
    },

    /// List bundled scenarios
    List,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            scenario,
            save,
            texts,
            fresh,
        } => commands::play::run(&scenario, save, texts, fresh),
        Commands::Check { scenario } => commands::check::run(&scenario),
        Commands::List => commands::list::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
