//! End-to-end persistence tests: an episode's learning must survive a trip
//! through the on-disk MessagePack format.

mod common;

use gridpilot::{
    AgentConfig, GridworldAgent, QTable, TeamId, WorldId,
    adapters::MsgPackRepository,
    grid::{Action, GridPos},
    ports::TableRepository,
};
use tempfile::TempDir;

use common::{CountingThrottle, ScriptedClient};

#[test]
fn test_episode_persists_learning_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("q_table.msgpack");

    let config = AgentConfig::new(&path)
        .with_epsilon(0.0)
        .with_max_steps(1)
        .with_seed(7);
    let client = ScriptedClient::new()
        .located_in("0", "2:3")
        .then_move(10.0, "2:4");

    let mut agent = GridworldAgent::new(
        TeamId::new("1459"),
        config,
        Box::new(client),
        Box::new(CountingThrottle::new()),
        Box::new(MsgPackRepository::new()),
    )
    .unwrap();
    agent.learn(&WorldId::new("0")).unwrap();

    let loaded = MsgPackRepository::new().load_or_fresh(&path).unwrap();
    assert_eq!(&loaded, agent.q_table());

    let state = GridPos::parse("2:3").unwrap();
    assert!((loaded.get(state, Action::North) - 1.0).abs() < 1e-12);
}

#[test]
fn test_fresh_agent_without_file_starts_from_zeros() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("never_written.msgpack");

    let agent = GridworldAgent::new(
        TeamId::new("1459"),
        AgentConfig::new(&path),
        Box::new(ScriptedClient::new()),
        Box::new(CountingThrottle::new()),
        Box::new(MsgPackRepository::new()),
    )
    .unwrap();

    assert_eq!(agent.q_table(), &QTable::new());
    assert!(!path.exists());
}

#[test]
fn test_second_episode_builds_on_the_first() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("q_table.msgpack");
    let throttle = CountingThrottle::new();

    // First episode: Q(2:3, N) <- 0.1 * 10 = 1.0
    let client = ScriptedClient::new()
        .located_in("0", "2:3")
        .then_move(10.0, "2:4");
    let config = AgentConfig::new(&path)
        .with_epsilon(0.0)
        .with_max_steps(1)
        .with_seed(7);
    let mut agent = GridworldAgent::new(
        TeamId::new("1459"),
        config.clone(),
        Box::new(client),
        Box::new(throttle.clone()),
        Box::new(MsgPackRepository::new()),
    )
    .unwrap();
    agent.learn(&WorldId::new("0")).unwrap();

    // Second run, fresh process: the move from 2:2 lands on 2:3, whose row
    // now carries the learned 1.0, so the Bellman backup sees it.
    // Q(2:2, N) <- 0.1 * (0 + 0.9 * 1.0) = 0.09
    let client = ScriptedClient::new()
        .located_in("0", "2:2")
        .then_move(0.0, "2:3");
    let mut agent = GridworldAgent::new(
        TeamId::new("1459"),
        config,
        Box::new(client),
        Box::new(throttle.clone()),
        Box::new(MsgPackRepository::new()),
    )
    .unwrap();
    agent.learn(&WorldId::new("0")).unwrap();

    let state = GridPos::parse("2:2").unwrap();
    assert!((agent.q_table().get(state, Action::North) - 0.09).abs() < 1e-12);
}
