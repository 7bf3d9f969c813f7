//! Infrastructure adapters implementing the domain ports.

pub mod http_client;
pub mod in_memory_repository;
pub mod msgpack_repository;
pub mod observers;
pub mod throttle;

pub use http_client::HttpGameClient;
pub use in_memory_repository::InMemoryRepository;
pub use msgpack_repository::{MsgPackRepository, SavedTable};
pub use observers::{JsonlObserver, ProgressObserver};
pub use throttle::{FixedDelay, NoDelay};
