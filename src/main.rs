//! Hangword - CLI
//!
//! Word guessing game with TUI and line-based modes, plus catalog listing and
//! automatic-player simulations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangword::{
    autoplay::GuesserType,
    catalog::{Catalog, loader::load_from_file},
    commands::{SimulateConfig, run_simple, run_simulation},
    core::DEFAULT_ERROR_LIMIT,
    game::{GameConfig, Session},
    output::{print_catalog, print_simulation_result},
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangword",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wrong guesses allowed before a round is lost
    #[arg(short, long, global = true, default_value_t = DEFAULT_ERROR_LIMIT,
          value_parser = clap::value_parser!(u32).range(1..))]
    error_limit: u32,

    /// Seed for word selection (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Load the catalog from a file instead of the built-in one
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// List the words in the catalog
    Catalog,

    /// Let an automatic player play many rounds
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Guesser: candidate (default), frequency, alphabetical, random
        #[arg(short, long, default_value = "candidate")]
        guesser: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the catalog from the --catalog path, or the built-in one
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = load_from_file(path)?;
            info!(path = %path.display(), words = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(Catalog::embedded()?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let config = GameConfig {
        error_limit: cli.error_limit,
        seed: cli.seed,
    };
    debug!(?config, "configuration");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(catalog, config),
        Commands::Simple => run_simple_command(catalog, config),
        Commands::Catalog => {
            print_catalog(&catalog);
            Ok(())
        }
        Commands::Simulate { count, guesser } => {
            run_simulate_command(&catalog, config, count, &guesser);
            Ok(())
        }
    }
}

fn run_play_command(catalog: Catalog, config: GameConfig) -> Result<()> {
    use hangword::interactive::{App, run_tui};

    let app = App::new(Session::new(catalog, config));
    run_tui(app)
}

fn run_simple_command(catalog: Catalog, config: GameConfig) -> Result<()> {
    let mut session = Session::new(catalog, config);
    run_simple(&mut session)
}

fn run_simulate_command(catalog: &Catalog, config: GameConfig, count: usize, guesser_name: &str) {
    let guesser = GuesserType::from_name(guesser_name, catalog);
    println!(
        "Simulating {count} rounds with the {} guesser...",
        guesser.name()
    );

    let sim_config = SimulateConfig::new(count, config);
    let result = run_simulation(catalog, &guesser, guesser.name(), &sim_config);
    print_simulation_result(&result);
}
