//! In-memory table repository for testing.
//!
//! Stores serialized tables in a shared map, avoiding file system I/O
//! entirely. Clones share the same underlying storage, so a test can hold one
//! handle while the agent owns another.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{
    Result,
    adapters::msgpack_repository::SavedTable,
    error::Error,
    ports::TableRepository,
    q_table::QTable,
};

/// In-memory repository for tests.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    saves: Arc<Mutex<usize>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls made so far.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    /// Whether a table has been stored under the given path.
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }

    /// Remove all stored tables and reset the save counter.
    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
        *self.saves.lock().unwrap() = 0;
    }
}

impl TableRepository for InMemoryRepository {
    fn load_or_fresh(&self, path: &Path) -> Result<QTable> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage.lock().unwrap();

        match storage.get(&key) {
            None => Ok(QTable::new()),
            Some(bytes) => {
                let saved: SavedTable =
                    rmp_serde::from_slice(bytes).map_err(|e| Error::Serialization {
                        operation: "deserialize Q-table from in-memory storage".to_string(),
                        message: e.to_string(),
                    })?;
                saved.into_table()
            }
        }
    }

    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();
        let bytes =
            rmp_serde::to_vec(&SavedTable::from_table(table)).map_err(|e| Error::Serialization {
                operation: "serialize Q-table for in-memory storage".to_string(),
                message: e.to_string(),
            })?;

        self.storage.lock().unwrap().insert(key, bytes);
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
