//! Win/loss record and where it is kept.
//!
//! The engine never touches storage itself. Front ends hold a [`Scoreboard`],
//! which loads the record from a [`StatsStore`] at startup and writes it back
//! after every finished round.

use crate::game::Outcome;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u64,
    pub losses: u64,
    #[serde(default)]
    pub pushes: u64,
}

impl Record {
    pub fn record(&mut self, outcome: Outcome) {
        if outcome.player_won() {
            self.wins += 1;
        } else if outcome.player_lost() {
            self.losses += 1;
        } else {
            self.pushes += 1;
        }
    }

    pub fn rounds(&self) -> u64 {
        self.wins + self.losses + self.pushes
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum StatsError {
    #[error("stats io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed stats record: {0}")]
    Format(#[from] serde_json::Error),
}

/// A source and sink for the persisted record.
pub trait StatsStore {
    fn load(&mut self) -> Result<Record, StatsError>;
    fn save(&mut self, record: &Record) -> Result<(), StatsError>;
}

/// Keeps the record as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    /// A missing file is an empty record.
    fn load(&mut self) -> Result<Record, StatsError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Record::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, record: &Record) -> Result<(), StatsError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(record)?)?;
        Ok(())
    }
}

/// Keeps the record in memory; used when no stats file is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Record>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: Record) -> Self {
        Self { saved: Some(record), saves: 0 }
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StatsStore for MemoryStore {
    fn load(&mut self) -> Result<Record, StatsError> {
        Ok(self.saved.unwrap_or_default())
    }

    fn save(&mut self, record: &Record) -> Result<(), StatsError> {
        self.saved = Some(*record);
        self.saves += 1;
        Ok(())
    }
}

/// The live record plus its store. Storage failures are logged and never
/// interrupt play.
pub struct Scoreboard {
    record: Record,
    store: Box<dyn StatsStore>,
}

impl std::fmt::Debug for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scoreboard").field("record", &self.record).finish_non_exhaustive()
    }
}

impl Scoreboard {
    /// Load the starting record, falling back to an empty one if the store
    /// can't be read.
    pub fn open(mut store: Box<dyn StatsStore>) -> Self {
        let record = match store.load() {
            Ok(record) => {
                info!(
                    "loaded record: {} wins, {} losses, {} pushes",
                    record.wins, record.losses, record.pushes
                );
                record
            }
            Err(err) => {
                error!("error loading stats, starting from zero: {err}");
                Record::default()
            }
        };
        Self { record, store }
    }

    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStore::new()))
    }

    pub fn record(&self) -> Record {
        self.record
    }

    /// Count a finished round and persist the new record.
    pub fn push(&mut self, outcome: Outcome) {
        self.record.record(outcome);
        if let Err(err) = self.store.save(&self.record) {
            error!("error saving stats: {err}");
        }
    }
}
