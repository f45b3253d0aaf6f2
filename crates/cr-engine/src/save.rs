//! Checkpoint persistence.
//!
//! One JSON record per game, replaced atomically after every step and
//! removed when the run ends normally. Anything that does not parse as a
//! current-version record is treated as no checkpoint at all.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use cr_core::{MoveId, PlayerRecord};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

/// Current save file version.
pub const SAVE_VERSION: u32 = 1;

/// Everything needed to resume a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Save format version.
    pub version: u32,
    /// When the checkpoint was written.
    pub saved_at: DateTime<Utc>,
    /// Saved player state.
    pub player: PlayerRecord,
    /// The move to resume at.
    pub current_move: MoveId,
}

impl SaveRecord {
    /// Create a record stamped with the current time.
    pub fn new(player: PlayerRecord, current_move: MoveId) -> Self {
        Self {
            version: SAVE_VERSION,
            saved_at: Utc::now(),
            player,
            current_move,
        }
    }
}

/// Reads and writes the save file at a fixed path.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    /// Create a store for the given path. Nothing is touched yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the save file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a save file is present (valid or not).
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the checkpoint, if a valid one exists.
    pub fn load(&self) -> Option<SaveRecord> {
        match self.read() {
            Ok(record) => Some(record),
            Err(EngineError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no save file");
                None
            }
            Err(e) => {
                warn!(path = %self.path.display(), "ignoring unusable save file: {e}");
                None
            }
        }
    }

    fn read(&self) -> EngineResult<SaveRecord> {
        let content = fs::read_to_string(&self.path)?;
        let record: SaveRecord = serde_json::from_str(&content)?;
        if record.version != SAVE_VERSION {
            return Err(EngineError::VersionMismatch {
                expected: SAVE_VERSION,
                found: record.version,
            });
        }
        Ok(record)
    }

    /// Replace the save file with `record`.
    ///
    /// The record is written to a temporary file next to the target and
    /// renamed over it, so readers see either the old or the new record.
    pub fn save(&self, record: &SaveRecord) -> EngineResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, record)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!(path = %self.path.display(), current_move = %record.current_move, "checkpoint written");
        Ok(())
    }

    /// Remove the save file. Does nothing if it is absent.
    pub fn delete(&self) -> EngineResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "save file removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
