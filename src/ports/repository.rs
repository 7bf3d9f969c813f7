//! Repository port for Q-table persistence.

use std::path::Path;

use crate::{Result, q_table::QTable};

/// Port for persisting and loading Q-tables.
///
/// Abstracts the storage mechanism so the learning loop does not care whether
/// tables live in MessagePack files or test memory.
pub trait TableRepository: Send {
    /// Load the table at `path`, or return a fresh zeroed table when no file
    /// exists there. A missing file is not an error; a present but malformed
    /// or mis-shaped file is.
    fn load_or_fresh(&self, path: &Path) -> Result<QTable>;

    /// Persist the full table to `path`, overwriting existing content.
    fn save(&self, table: &QTable, path: &Path) -> Result<()>;
}
