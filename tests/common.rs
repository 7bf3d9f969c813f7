//! Common test doubles for the episode test suite.
//!
//! The scripted client replays canned server responses and counts calls; the
//! counting throttle records pauses instead of sleeping. Both hand out
//! cloneable handles sharing the same state, so a test can keep one handle
//! while the agent owns the other.

#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use gridpilot::{
    Result,
    grid::Action,
    identifiers::{TeamId, WorldId},
    ports::{EntryOutcome, GameClient, Location, MoveOutcome, MoveThrottle},
};

#[derive(Default)]
struct Script {
    location: Mutex<Option<Result<Option<Location>>>>,
    entry: Mutex<Option<Result<EntryOutcome>>>,
    moves: Mutex<VecDeque<Result<MoveOutcome>>>,
    location_calls: AtomicUsize,
    entry_calls: AtomicUsize,
    move_calls: AtomicUsize,
}

/// Game client replaying a canned script of responses.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    script: Arc<Script>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the location query to place the team in `world` at `state`.
    pub fn located_in(self, world: &str, state: &str) -> Self {
        *self.script.location.lock().unwrap() = Some(Ok(Some(Location {
            world: WorldId::new(world),
            state: state.to_string(),
        })));
        self
    }

    /// Script the location query to report no known location.
    pub fn located_nowhere(self) -> Self {
        *self.script.location.lock().unwrap() = Some(Ok(None));
        self
    }

    /// Script the location query to fail at the transport level.
    pub fn location_fails(self) -> Self {
        *self.script.location.lock().unwrap() = Some(Err(transport_error("location")));
        self
    }

    /// Script the entry request outcome.
    pub fn entry(self, outcome: EntryOutcome) -> Self {
        *self.script.entry.lock().unwrap() = Some(Ok(outcome));
        self
    }

    /// Script the entry request to fail at the transport level.
    pub fn entry_fails(self) -> Self {
        *self.script.entry.lock().unwrap() = Some(Err(transport_error("enter")));
        self
    }

    /// Append a successful move to the script.
    pub fn then_move(self, reward: f64, state: &str) -> Self {
        self.script
            .moves
            .lock()
            .unwrap()
            .push_back(Ok(MoveOutcome::Moved {
                reward,
                state: state.to_string(),
            }));
        self
    }

    /// Append a failed move (no reward / no successor) to the script.
    pub fn then_failed_move(self) -> Self {
        self.script
            .moves
            .lock()
            .unwrap()
            .push_back(Ok(MoveOutcome::Failed));
        self
    }

    /// Append a transport-level move failure to the script.
    pub fn then_move_error(self) -> Self {
        self.script
            .moves
            .lock()
            .unwrap()
            .push_back(Err(transport_error("move")));
        self
    }

    pub fn location_calls(&self) -> usize {
        self.script.location_calls.load(Ordering::SeqCst)
    }

    pub fn entry_calls(&self) -> usize {
        self.script.entry_calls.load(Ordering::SeqCst)
    }

    pub fn move_calls(&self) -> usize {
        self.script.move_calls.load(Ordering::SeqCst)
    }
}

fn transport_error(endpoint: &str) -> gridpilot::Error {
    gridpilot::Error::Protocol {
        endpoint: endpoint.to_string(),
        message: "scripted failure".to_string(),
    }
}

impl GameClient for ScriptedClient {
    fn location(&self, _team: &TeamId) -> Result<Option<Location>> {
        self.script.location_calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .location
            .lock()
            .unwrap()
            .take()
            .expect("unscripted location call")
    }

    fn enter_world(&self, _team: &TeamId, _world: &WorldId) -> Result<EntryOutcome> {
        self.script.entry_calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .entry
            .lock()
            .unwrap()
            .take()
            .expect("unscripted enter_world call")
    }

    fn make_move(&self, _team: &TeamId, _action: Action, _world: &WorldId) -> Result<MoveOutcome> {
        self.script.move_calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .moves
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted make_move call")
    }
}

/// Throttle that counts pauses instead of sleeping.
#[derive(Clone, Default)]
pub struct CountingThrottle {
    pauses: Arc<AtomicUsize>,
}

impl CountingThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

impl MoveThrottle for CountingThrottle {
    fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}
