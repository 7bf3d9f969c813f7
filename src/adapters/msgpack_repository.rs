//! MessagePack implementation of the table repository.
//!
//! Tables are stored as a versioned MessagePack blob via rmp_serde, so the
//! format can evolve without silently misreading old files.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Result,
    error::Error,
    grid::Action,
    ports::TableRepository,
    q_table::QTable,
};

/// On-disk representation of a persisted Q-table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTable {
    /// Format version; bumped on incompatible layout changes.
    pub version: u32,
    /// Dense Q-value rows, 1600x4.
    pub rows: Vec<[f64; Action::COUNT]>,
}

impl SavedTable {
    /// Current format version.
    pub const VERSION: u32 = 1;

    /// Wrap a table for saving.
    pub fn from_table(table: &QTable) -> Self {
        Self {
            version: Self::VERSION,
            rows: table.rows().to_vec(),
        }
    }

    /// Unwrap into a table, checking version and shape.
    pub fn into_table(self) -> Result<QTable> {
        if self.version != Self::VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }
        QTable::from_rows(self.rows)
    }
}

/// MessagePack-based table repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl TableRepository for MsgPackRepository {
    fn load_or_fresh(&self, path: &Path) -> Result<QTable> {
        if !path.exists() {
            info!(path = %path.display(), "no saved Q-table, starting fresh");
            return Ok(QTable::new());
        }

        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open table file {path:?}"),
            source,
        })?;
        let reader = BufReader::new(file);

        let saved: SavedTable =
            rmp_serde::decode::from_read(reader).map_err(|e| Error::Serialization {
                operation: "deserialize Q-table from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        let table = saved.into_table()?;
        info!(path = %path.display(), "loaded Q-table");
        Ok(table)
    }

    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create table file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, &SavedTable::from_table(table)).map_err(|e| {
            Error::Serialization {
                operation: "serialize Q-table to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        info!(path = %path.display(), "Q-table saved");
        Ok(())
    }
}
