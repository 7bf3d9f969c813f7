//! gridpilot CLI - drive a remote gridworld with tabular Q-learning.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridpilot")]
#[command(version, about = "Q-learning client for a remote gridworld", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run Q-learning episodes in one or more worlds
    Learn(gridpilot::cli::commands::learn::LearnArgs),

    /// Show a team's most recent runs
    Runs(gridpilot::cli::commands::stats::RunsArgs),

    /// Show a team's current score
    Score(gridpilot::cli::commands::stats::ScoreArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Learn(args) => gridpilot::cli::commands::learn::execute(args),
        Commands::Runs(args) => gridpilot::cli::commands::stats::runs(args),
        Commands::Score(args) => gridpilot::cli::commands::stats::score(args),
    }
}
