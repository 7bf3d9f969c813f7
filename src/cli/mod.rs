//! CLI infrastructure for the gridpilot client.
//!
//! This module provides the command-line interface for running learning
//! episodes against a game server and inspecting a team's runs and score.

pub mod commands;
