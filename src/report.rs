//! Episode summaries and per-step records.

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a learning episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeOutcome {
    /// The full step budget ran.
    Completed,
    /// The current state failed to decode; the episode stopped early.
    InvalidState,
    /// A move came back without reward or successor state.
    MoveFailed,
    /// The server refused entry into the requested world.
    EntryRefused,
    /// The initial location query failed.
    LocationUnavailable,
}

/// Observation of a single step within an episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based step number within the episode.
    pub step: usize,
    /// State the move was made from, in `"x:y"` encoding.
    pub state: String,
    /// Move token sent to the server (`N`, `S`, `W`, `E`).
    pub action: String,
    /// Reward observed for the move.
    pub reward: f64,
    /// State the move led to, as reported by the server.
    pub next_state: String,
    /// Whether the Bellman update was applied for this step.
    pub updated: bool,
    /// New Q-value for the (state, action) cell, when updated.
    pub q_value: Option<f64>,
}

/// Summary of one `learn` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeReport {
    /// World the episode ran in.
    pub world: String,
    /// Moves that returned a reward and successor state.
    pub steps: usize,
    /// Bellman updates actually applied.
    pub updates: usize,
    /// Sum of observed rewards.
    pub total_reward: f64,
    /// How the episode ended.
    pub outcome: EpisodeOutcome,
}

impl EpisodeReport {
    /// An episode that ended before any move was made.
    pub fn aborted(world: impl Into<String>, outcome: EpisodeOutcome) -> Self {
        Self {
            world: world.into(),
            steps: 0,
            updates: 0,
            total_reward: 0.0,
            outcome,
        }
    }

    /// Whether the Q-table was persisted for this episode.
    ///
    /// Entry refusal and location failures abort before anything is learned,
    /// so nothing is saved for them.
    pub fn table_saved(&self) -> bool {
        !matches!(
            self.outcome,
            EpisodeOutcome::EntryRefused | EpisodeOutcome::LocationUnavailable
        )
    }

    /// Save the report as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref()).map_err(|source| Error::Io {
            operation: format!("create summary file {:?}", path.as_ref()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self).map_err(|e| Error::Serialization {
            operation: "serialize episode report".to_string(),
            message: e.to_string(),
        })
    }
}
