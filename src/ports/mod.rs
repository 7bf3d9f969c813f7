//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the learning loop and
//! infrastructure. Following hexagonal architecture, these traits are owned by
//! the domain and implemented by adapters in the infrastructure layer.

pub mod client;
pub mod observer;
pub mod repository;
pub mod throttle;

pub use client::{EntryOutcome, GameClient, Location, MoveOutcome};
pub use observer::EpisodeObserver;
pub use repository::TableRepository;
pub use throttle::MoveThrottle;
