//! Observer port for episode monitoring and data collection.
//!
//! Observers compose: a progress bar for the operator and a JSONL exporter for
//! analysis can watch the same episode without the learning loop knowing about
//! either.

use crate::{
    Result,
    identifiers::WorldId,
    report::{EpisodeReport, StepRecord},
};

/// Observer trait for monitoring a learning episode.
///
/// # Event Sequence
///
/// 1. `on_episode_start(world, max_steps)` - once, before the first step
/// 2. `on_step(record)` - for each move that returned a reward
/// 3. `on_episode_end(report)` - once, after the table was saved
///
/// All methods default to no-ops so observers only implement the events they
/// care about.
pub trait EpisodeObserver: Send {
    /// Called before the first step of an episode.
    fn on_episode_start(&mut self, _world: &WorldId, _max_steps: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each completed move.
    fn on_step(&mut self, _record: &StepRecord) -> Result<()> {
        Ok(())
    }

    /// Called once the episode has ended.
    fn on_episode_end(&mut self, _report: &EpisodeReport) -> Result<()> {
        Ok(())
    }
}
