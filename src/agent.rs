//! The Q-learning agent and its episode loop.
//!
//! One `learn` call is one episode: observe the current location, enter the
//! requested world if necessary, then repeatedly choose a move, submit it,
//! and fold the observed reward into the Q-table until the step budget runs
//! out or the server stops cooperating. The table is persisted at the end of
//! every episode that got past world entry, so partial learning survives
//! failures.

use tracing::{info, warn};

use crate::{
    Result,
    config::AgentConfig,
    grid::GridPos,
    identifiers::{TeamId, WorldId},
    policy::EpsilonGreedy,
    ports::{EntryOutcome, EpisodeObserver, GameClient, MoveOutcome, MoveThrottle, TableRepository},
    q_table::QTable,
    report::{EpisodeOutcome, EpisodeReport, StepRecord},
};

/// Tabular Q-learning agent driving a remote gridworld.
///
/// The agent owns its Q-table and policy; the game server, move throttle, and
/// table storage are injected collaborators.
pub struct GridworldAgent {
    team: TeamId,
    config: AgentConfig,
    q_table: QTable,
    policy: EpsilonGreedy,
    client: Box<dyn GameClient>,
    throttle: Box<dyn MoveThrottle>,
    repository: Box<dyn TableRepository>,
    observers: Vec<Box<dyn EpisodeObserver>>,
}

impl GridworldAgent {
    /// Create an agent, loading its Q-table from the configured path (or
    /// starting from zeros when no saved table exists).
    ///
    /// # Errors
    ///
    /// Returns an error if a saved table exists but cannot be read.
    pub fn new(
        team: TeamId,
        config: AgentConfig,
        client: Box<dyn GameClient>,
        throttle: Box<dyn MoveThrottle>,
        repository: Box<dyn TableRepository>,
    ) -> Result<Self> {
        let q_table = repository.load_or_fresh(&config.table_path)?;
        let mut policy = EpsilonGreedy::new(config.epsilon);
        if let Some(seed) = config.seed {
            policy = policy.with_seed(seed);
        }
        Ok(Self {
            team,
            config,
            q_table,
            policy,
            client,
            throttle,
            repository,
            observers: Vec::new(),
        })
    }

    /// Add an observer notified of episode progress.
    pub fn with_observer(mut self, observer: Box<dyn EpisodeObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// The agent's current Q-table.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Run one learning episode in the given world.
    ///
    /// Game-side failures never surface as errors: they end the episode (or
    /// abort it before it starts) and are reported in the returned
    /// [`EpisodeReport`]. Only persistence and observer failures are `Err`.
    pub fn learn(&mut self, world: &WorldId) -> Result<EpisodeReport> {
        // INIT: where does the server think we are?
        let location = match self.client.location(&self.team) {
            Ok(location) => location,
            Err(err) => {
                warn!(error = %err, "location query failed, aborting");
                let report = EpisodeReport::aborted(world.as_str(), EpisodeOutcome::LocationUnavailable);
                self.notify_end(&report)?;
                return Ok(report);
            }
        };

        // ENSURE_WORLD: enter unless already inside the requested world.
        // Entry refusal aborts the whole call with nothing saved.
        let mut state_text = match location {
            Some(location) if location.world == *world => location.state,
            _ => match self.client.enter_world(&self.team, world) {
                Ok(EntryOutcome::Entered(state)) => state,
                Ok(EntryOutcome::Refused) => {
                    warn!(%world, "world entry refused, aborting");
                    let report = EpisodeReport::aborted(world.as_str(), EpisodeOutcome::EntryRefused);
                    self.notify_end(&report)?;
                    return Ok(report);
                }
                Err(err) => {
                    warn!(%world, error = %err, "world entry failed, aborting");
                    let report = EpisodeReport::aborted(world.as_str(), EpisodeOutcome::EntryRefused);
                    self.notify_end(&report)?;
                    return Ok(report);
                }
            },
        };

        for observer in &mut self.observers {
            observer.on_episode_start(world, self.config.max_steps)?;
        }

        let params = self.config.learning_params();
        let mut steps = 0;
        let mut updates = 0;
        let mut total_reward = 0.0;
        let mut outcome = EpisodeOutcome::Completed;

        for step in 0..self.config.max_steps {
            // An undecodable current state leaves nothing to index the table
            // with; end the episode and keep what was learned so far.
            let pos = match GridPos::parse(&state_text) {
                Ok(pos) => pos,
                Err(err) => {
                    warn!(state = %state_text, error = %err, "invalid current state, ending episode");
                    outcome = EpisodeOutcome::InvalidState;
                    break;
                }
            };

            let action = self.policy.select(self.q_table.row(pos));

            // The server rate-limits moves; pause after every attempt,
            // successful or not.
            let moved = self.client.make_move(&self.team, action, world);
            self.throttle.pause();

            let (reward, next_text) = match moved {
                Ok(MoveOutcome::Moved { reward, state }) => (reward, state),
                Ok(MoveOutcome::Failed) => {
                    warn!(%action, "move failed, ending episode");
                    outcome = EpisodeOutcome::MoveFailed;
                    break;
                }
                Err(err) => {
                    warn!(%action, error = %err, "move request failed, ending episode");
                    outcome = EpisodeOutcome::MoveFailed;
                    break;
                }
            };

            steps += 1;
            total_reward += reward;

            // A successor that fails to decode skips this update only; the
            // episode carries on and the next iteration decides its fate.
            let (updated, q_value) = match GridPos::parse(&next_text) {
                Ok(next_pos) => {
                    self.q_table
                        .q_learning_update(pos, action, reward, next_pos, params);
                    updates += 1;
                    (true, Some(self.q_table.get(pos, action)))
                }
                Err(err) => {
                    warn!(next_state = %next_text, error = %err, "invalid successor state, skipping update");
                    (false, None)
                }
            };

            let record = StepRecord {
                step,
                state: state_text,
                action: action.api_token().to_string(),
                reward,
                next_state: next_text.clone(),
                updated,
                q_value,
            };
            for observer in &mut self.observers {
                observer.on_step(&record)?;
            }

            state_text = next_text;
        }

        // SAVE: unconditional once the episode started, even with zero steps.
        self.repository.save(&self.q_table, &self.config.table_path)?;
        info!(%world, steps, updates, total_reward, "episode finished");

        let report = EpisodeReport {
            world: world.as_str().to_string(),
            steps,
            updates,
            total_reward,
            outcome,
        };
        self.notify_end(&report)?;
        Ok(report)
    }

    fn notify_end(&mut self, report: &EpisodeReport) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_episode_end(report)?;
        }
        Ok(())
    }
}
