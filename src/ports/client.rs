//! Game client port.
//!
//! The learning loop consumes the game server through this trait, so episodes
//! can run against an HTTP adapter in production and a scripted fake in tests.
//! Every call returns a typed outcome: "the move failed" is a distinct variant,
//! never a sentinel reward.

use crate::{
    error::Result,
    grid::Action,
    identifiers::{TeamId, WorldId},
};

/// Where the server currently places a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// World the team occupies.
    pub world: WorldId,
    /// Position within that world, in `"x:y"` encoding.
    pub state: String,
}

/// Result of asking to enter a world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Entry succeeded; the server reports the starting state.
    Entered(String),
    /// The server declined the entry request.
    Refused,
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The move was accepted.
    Moved {
        /// Reward observed for the move.
        reward: f64,
        /// Successor state, in `"x:y"` encoding.
        state: String,
    },
    /// The server reported the move without a reward or successor state.
    Failed,
}

/// Port for the external gridworld game server.
///
/// Calls are synchronous and blocking; there is no retry policy at this
/// boundary. Transport-level failures surface as [`Error`](crate::Error) and
/// are absorbed by the learning loop.
pub trait GameClient: Send {
    /// Which world and state the team is currently in, if the server knows.
    fn location(&self, team: &TeamId) -> Result<Option<Location>>;

    /// Request entry into a world.
    fn enter_world(&self, team: &TeamId, world: &WorldId) -> Result<EntryOutcome>;

    /// Perform one move in a world.
    fn make_move(&self, team: &TeamId, action: Action, world: &WorldId) -> Result<MoveOutcome>;
}
