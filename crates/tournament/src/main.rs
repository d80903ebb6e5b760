//! Tournament CLI
//!
//! Create round-robin schedules, record results and print standings.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roundrobin_core::MatchResult;
use std::path::PathBuf;
use tournament::{
    schedule_report, simulate_ongoing, standings_json, standings_report, TournamentFile,
    TournamentState,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", version, about = "Round-robin chess tournament manager")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a TOML tournament file, generate the schedule and save the state
    Init {
        /// Tournament definition (TOML)
        config: PathBuf,
        /// Where to write the tournament state
        #[arg(short, long, default_value = "tournament.json")]
        output: PathBuf,
    },
    /// Print the full schedule
    Schedule {
        state: PathBuf,
    },
    /// Record the result of one game
    #[command(name = "result")]
    Record {
        state: PathBuf,
        /// Matchday number, starting at 1
        matchday: usize,
        /// Game number within the matchday, starting at 1
        game: usize,
        /// 1-0, 0-1, 1/2-1/2 (or white, black, draw)
        outcome: String,
    },
    /// Fill all ongoing games with random results
    Simulate {
        state: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the standings
    Standings {
        state: PathBuf,
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_init(config: PathBuf, output: PathBuf) -> Result<()> {
    let file = TournamentFile::load(&config)?;
    let name = file.name.clone();
    let mut tournament = file.into_tournament()?;
    tournament
        .generate_schedule()
        .context("Failed to generate schedule")?;

    let state = TournamentState::new(&name, tournament);
    state.save(&output)?;

    println!("=== {} ===", state.name);
    println!(
        "{} players, {} matchdays",
        state.tournament.participants().len(),
        state.tournament.matchdays().len()
    );
    println!("Saved to {}", output.display());
    Ok(())
}

fn run_schedule(path: PathBuf) -> Result<()> {
    let state = TournamentState::load(&path)?;
    if state.tournament.is_schedule_stale() {
        tracing::warn!("players were added after the schedule was generated");
    }
    println!("=== {} ===\n", state.name);
    print!("{}", schedule_report(&state.tournament));
    Ok(())
}

fn run_result(path: PathBuf, matchday: usize, game: usize, outcome: &str) -> Result<()> {
    if matchday == 0 || game == 0 {
        bail!("matchday and game numbers start at 1");
    }
    let result: MatchResult = outcome.parse()?;

    let mut state = TournamentState::load(&path)?;
    state.tournament.set_result(matchday - 1, game - 1, result)?;
    state.tournament.evaluate_all()?;
    state.save(&path)?;

    tracing::info!(matchday, game, %result, "result recorded");
    println!("Matchday {matchday}, game {game}: {}\n", result.notation());
    print!("{}", standings_report(&state.tournament));
    Ok(())
}

fn run_simulate(path: PathBuf, seed: Option<u64>) -> Result<()> {
    let mut state = TournamentState::load(&path)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let filled = simulate_ongoing(&mut state.tournament, &mut rng)?;
    state.save(&path)?;

    println!("Simulated {} games\n", filled);
    print!("{}", standings_report(&state.tournament));
    Ok(())
}

fn run_standings(path: PathBuf, json: bool) -> Result<()> {
    let state = TournamentState::load(&path)?;
    if json {
        println!("{}", standings_json(&state.tournament)?);
    } else {
        println!("=== {} ===\n", state.name);
        print!("{}", standings_report(&state.tournament));
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { config, output } => run_init(config, output),
        Commands::Schedule { state } => run_schedule(state),
        Commands::Record {
            state,
            matchday,
            game,
            outcome,
        } => run_result(state, matchday, game, &outcome),
        Commands::Simulate { state, seed } => run_simulate(state, seed),
        Commands::Standings { state, json } => run_standings(state, json),
    }
}
