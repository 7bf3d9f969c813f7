//! HTTP adapter for the gridworld game server.
//!
//! Wraps a blocking reqwest client; the learning loop is single-threaded and
//! fully synchronous, so there is no async runtime anywhere in this crate.
//! The server signals "unknown" or "failed" by returning `null` fields, which
//! this adapter maps onto the typed port outcomes.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    Result,
    error::Error,
    grid::Action,
    identifiers::{TeamId, WorldId},
    ports::{EntryOutcome, GameClient, Location, MoveOutcome},
};

#[derive(Debug, Deserialize)]
struct LocationResponse {
    world: Option<String>,
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EnterResponse {
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MoveResponse {
    reward: Option<f64>,
    state: Option<String>,
}

fn location_from(response: LocationResponse) -> Option<Location> {
    match (response.world, response.state) {
        (Some(world), Some(state)) => Some(Location {
            world: WorldId::new(world),
            state,
        }),
        _ => None,
    }
}

fn entry_outcome_from(response: EnterResponse) -> EntryOutcome {
    match response.state {
        Some(state) => EntryOutcome::Entered(state),
        None => EntryOutcome::Refused,
    }
}

fn move_outcome_from(response: MoveResponse) -> MoveOutcome {
    match (response.reward, response.state) {
        (Some(reward), Some(state)) => MoveOutcome::Moved { reward, state },
        _ => MoveOutcome::Failed,
    }
}

/// Blocking HTTP implementation of [`GameClient`].
pub struct HttpGameClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpGameClient {
    /// Create a client for the server at `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let http = Client::builder().build().map_err(|e| Error::Protocol {
            endpoint: base_url.clone(),
            message: format!("failed to build HTTP client: {e}"),
        })?;
        Ok(Self {
            http,
            base_url,
            api_key: None,
        })
    }

    /// Attach an API key sent as the `x-api-key` header on every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{endpoint}", self.base_url);
        let mut request = self.http.get(&url).query(query);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().map_err(|source| Error::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Protocol {
                endpoint: endpoint.to_string(),
                message: format!("server returned {status}"),
            });
        }

        debug!(endpoint, "request ok");
        response.json().map_err(|e| Error::Protocol {
            endpoint: endpoint.to_string(),
            message: format!("invalid JSON body: {e}"),
        })
    }

    fn post_json<T: for<'de> Deserialize<'de>>(&self, endpoint: &str, body: Value) -> Result<T> {
        let url = format!("{}/{endpoint}", self.base_url);
        let mut request = self.http.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().map_err(|source| Error::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Protocol {
                endpoint: endpoint.to_string(),
                message: format!("server returned {status}"),
            });
        }

        debug!(endpoint, "request ok");
        response.json().map_err(|e| Error::Protocol {
            endpoint: endpoint.to_string(),
            message: format!("invalid JSON body: {e}"),
        })
    }

    /// Most recent runs recorded for a team, as reported by the server.
    pub fn recent_runs(&self, team: &TeamId, count: usize) -> Result<Value> {
        self.get_json(
            "runs",
            &[("teamId", team.as_str()), ("count", &count.to_string())],
        )
    }

    /// Current score for a team, as reported by the server.
    pub fn score(&self, team: &TeamId) -> Result<Value> {
        self.get_json("score", &[("teamId", team.as_str())])
    }
}

impl GameClient for HttpGameClient {
    fn location(&self, team: &TeamId) -> Result<Option<Location>> {
        let response: LocationResponse =
            self.get_json("location", &[("teamId", team.as_str())])?;
        Ok(location_from(response))
    }

    fn enter_world(&self, team: &TeamId, world: &WorldId) -> Result<EntryOutcome> {
        let response: EnterResponse = self.post_json(
            "enter",
            serde_json::json!({
                "teamId": team.as_str(),
                "worldId": world.as_str(),
            }),
        )?;
        Ok(entry_outcome_from(response))
    }

    fn make_move(&self, team: &TeamId, action: Action, world: &WorldId) -> Result<MoveOutcome> {
        let response: MoveResponse = self.post_json(
            "move",
            serde_json::json!({
                "teamId": team.as_str(),
                "worldId": world.as_str(),
                "move": action.api_token(),
            }),
        )?;
        Ok(move_outcome_from(response))
    }
}
