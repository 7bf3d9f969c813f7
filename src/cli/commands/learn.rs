//! Learn command - run Q-learning episodes against the game server.

use std::{fs::File, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::to_writer_pretty;

use crate::{
    adapters::{FixedDelay, JsonlObserver, MsgPackRepository, NoDelay, ProgressObserver},
    agent::GridworldAgent,
    config::AgentConfig,
    identifiers::{TeamId, WorldId},
    ports::{MoveThrottle, TableRepository},
    report::EpisodeReport,
};

use super::ServerArgs;

#[derive(Parser, Debug)]
#[command(about = "Run Q-learning episodes", allow_negative_numbers = true)]
pub struct LearnArgs {
    /// Team identity to play as
    pub team_id: String,

    /// World to learn in; repeat for sequential episodes across worlds
    #[arg(long = "world", required = true)]
    pub worlds: Vec<String>,

    /// Step budget per episode
    #[arg(long, short = 's', default_value_t = 100)]
    pub steps: usize,

    /// Path of the persisted Q-table
    #[arg(long, default_value = "q_table.msgpack")]
    pub table: PathBuf,

    /// Exploration rate epsilon
    #[arg(long, default_value_t = crate::config::DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Learning rate alpha
    #[arg(long, default_value_t = crate::config::DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Discount factor gamma
    #[arg(long, default_value_t = crate::config::DEFAULT_GAMMA)]
    pub gamma: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Optional file for JSONL step observations
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Seconds to wait after each move
    #[arg(long, default_value_t = 15)]
    pub move_delay: u64,

    /// Skip the move delay entirely (local servers only)
    #[arg(long, default_value_t = false)]
    pub no_delay: bool,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,

    #[command(flatten)]
    pub server: ServerArgs,
}

pub fn execute(args: LearnArgs) -> Result<()> {
    let client = args.server.build_client()?;

    let throttle: Box<dyn MoveThrottle> = if args.no_delay {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay::with_delay(Duration::from_secs(args.move_delay)))
    };

    let repository: Box<dyn TableRepository> = Box::new(MsgPackRepository::new());

    let mut config = AgentConfig::new(&args.table)
        .with_alpha(args.alpha)
        .with_gamma(args.gamma)
        .with_epsilon(args.epsilon)
        .with_max_steps(args.steps);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut agent = GridworldAgent::new(
        TeamId::new(&args.team_id),
        config,
        Box::new(client),
        throttle,
        repository,
    )
    .context("Failed to create agent")?;

    if args.progress {
        agent = agent.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.observations {
        let observer =
            JsonlObserver::new(path).context("Failed to open observations file")?;
        agent = agent.with_observer(Box::new(observer));
    }

    let mut reports: Vec<EpisodeReport> = Vec::with_capacity(args.worlds.len());
    for world in &args.worlds {
        let world = WorldId::new(world.as_str());
        let report = agent
            .learn(&world)
            .with_context(|| format!("Learning in world {world} failed"))?;

        println!(
            "world {}: {} steps, {} updates, total reward {:.2} ({:?})",
            report.world, report.steps, report.updates, report.total_reward, report.outcome
        );
        reports.push(report);
    }

    if let Some(path) = &args.summary {
        let file = File::create(path)
            .with_context(|| format!("Failed to create summary file {}", path.display()))?;
        to_writer_pretty(file, &reports).context("Failed to write summary")?;
        println!("✓ Summary written to: {}", path.display());
    }

    Ok(())
}
