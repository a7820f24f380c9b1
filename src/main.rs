//! Wordle Helper - CLI
//!
//! Record guesses and tile colors, then ask a solver service for answers.
//! TUI by default, with a line-oriented mode and one-shot commands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use wordle_helper::{
    commands::{SolveConfig, best_opening, build_grid, request_json, run_simple, solve_rows},
    config::{Config, DEFAULT_SERVICE_URL, parse_log_level},
    core::Constraints,
    logging::{self, LogSink},
    output::{print_constraints, print_grid, print_results},
    service::HttpSolverService,
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper: record your guesses, get possible answers and next-guess suggestions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the solver service
    #[arg(long, global = true, env = "WORDLE_HELPER_URL", default_value = DEFAULT_SERVICE_URL)]
    url: String,

    /// Append log lines to this file
    #[arg(long, global = true, env = "WORDLE_HELPER_LOG")]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info (default), debug, trace
    #[arg(long, global = true, default_value = "info", value_parser = parse_log_level)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented grid editor without TUI)
    Simple,

    /// Solve the rows given on the command line
    Solve {
        /// A row as letters[:colors], e.g. crane:-Y--G (repeatable, top to bottom)
        #[arg(short, long = "row")]
        rows: Vec<String>,

        /// Print the request body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Ask the service for the best opening words
    Opening,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::with_base_url(&cli.url)
        .with_log_file(cli.log_file)
        .with_log_level(cli.log_level);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it never logs to stderr
    let sink = match command {
        Commands::Play => LogSink::FileOnly,
        _ => LogSink::FileOrStderr,
    };
    let _guard = logging::init(&config, sink).unwrap_or_else(|e| {
        eprintln!("Warning: logging disabled: {e:#}");
        None
    });

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Solve { rows, dry_run } => {
            run_solve_command(&config, &SolveConfig { rows, dry_run })
        }
        Commands::Opening => run_opening_command(&config),
    }
}

fn connect(config: &Config) -> Result<HttpSolverService> {
    HttpSolverService::new(config).map_err(|e| anyhow::anyhow!(e))
}

fn run_solve_command(config: &Config, solve: &SolveConfig) -> Result<()> {
    if solve.dry_run {
        let grid = build_grid(&solve.rows).map_err(|e| anyhow::anyhow!(e))?;
        print_grid(&grid);
        print_constraints(&Constraints::from_grid(&grid));
        println!("\n{}", request_json(&grid).map_err(|e| anyhow::anyhow!(e))?);
        return Ok(());
    }

    let service = connect(config)?;
    let session = solve_rows(solve, &service).map_err(|e| anyhow::anyhow!(e))?;

    print_grid(&session.grid);
    print_constraints(&Constraints::from_grid(&session.grid));
    print_results(&session.results);
    Ok(())
}

fn run_opening_command(config: &Config) -> Result<()> {
    let service = connect(config)?;
    let session = best_opening(&service);
    print_results(&session.results);
    Ok(())
}

fn run_simple_command(config: &Config) -> Result<()> {
    let service = connect(config)?;
    run_simple(&service)
}

fn run_play_command(config: &Config) -> Result<()> {
    use wordle_helper::interactive::{App, run_tui};

    let app = App::new(Arc::new(connect(config)?));
    run_tui(app)
}
