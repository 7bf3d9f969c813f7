//! Tabular Q-learning client for a remote gridworld game.
//!
//! This crate provides:
//! - A validated codec for the server's `"x:y"` state encoding
//! - A dense 40x40x4 Q-table with the one-step Q-learning update
//! - Epsilon-greedy action selection
//! - An episode loop that drives the game server, throttles moves, and
//!   persists learned values between runs
//! - Ports and adapters for the game server (HTTP), table storage
//!   (MessagePack), move throttling, and episode observation

pub mod adapters;
pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod identifiers;
pub mod policy;
pub mod ports;
pub mod q_table;
pub mod report;

pub use agent::GridworldAgent;
pub use config::AgentConfig;
pub use error::{Error, Result};
pub use grid::{Action, GRID_DIM, GridPos, STATE_COUNT};
pub use identifiers::{TeamId, WorldId};
pub use policy::EpsilonGreedy;
pub use q_table::{LearningParams, QTable};
pub use report::{EpisodeOutcome, EpisodeReport, StepRecord};
