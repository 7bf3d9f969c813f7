//! Runs and score commands - inspect a team's standing on the server.

use anyhow::{Context, Result};
use clap::Parser;

use crate::identifiers::TeamId;

use super::ServerArgs;

#[derive(Parser, Debug)]
#[command(about = "Show a team's most recent runs")]
pub struct RunsArgs {
    /// Team identity to query
    pub team_id: String,

    /// How many runs to fetch
    #[arg(long, short = 'c', default_value_t = 5)]
    pub count: usize,

    #[command(flatten)]
    pub server: ServerArgs,
}

pub fn runs(args: RunsArgs) -> Result<()> {
    let client = args.server.build_client()?;
    let value = client
        .recent_runs(&TeamId::new(&args.team_id), args.count)
        .context("Failed to fetch runs")?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[derive(Parser, Debug)]
#[command(about = "Show a team's current score")]
pub struct ScoreArgs {
    /// Team identity to query
    pub team_id: String,

    #[command(flatten)]
    pub server: ServerArgs,
}

pub fn score(args: ScoreArgs) -> Result<()> {
    let client = args.server.build_client()?;
    let value = client
        .score(&TeamId::new(&args.team_id))
        .context("Failed to fetch score")?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
