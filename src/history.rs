//! Persisted match history: a win/loss/draw tally.
//!
//! The engine reports a [`GameOutcome`]; recording it is the driver's job.
//! Stores are injected behind [`HistoryStore`] so the core never owns
//! persistence. [`FileHistory`] is the original browser-local tally made
//! explicit as a JSON file.

use crate::board::Player;
use crate::rules::GameOutcome;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Win/loss/draw counts from the human player's perspective.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Matches the human won.
    pub wins: u64,
    /// Matches the automated player won.
    pub losses: u64,
    /// Drawn matches.
    pub draws: u64,
}

impl Tally {
    /// Folds a terminal outcome into the tally. `InProgress` is ignored.
    pub fn record(&mut self, outcome: GameOutcome, human_mark: Player) {
        match outcome {
            GameOutcome::Win(player) if player == human_mark => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    /// Total number of recorded matches.
    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.draws
    }
}

/// Error from a history store.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum HistoryError {
    /// Reading or writing the backing file failed.
    #[display("history io error: {_0}")]
    Io(std::io::Error),

    /// The backing file does not hold a valid tally.
    #[display("history format error: {_0}")]
    Format(serde_json::Error),
}

impl std::error::Error for HistoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryError::Io(err) => Some(err),
            HistoryError::Format(err) => Some(err),
        }
    }
}

/// External state store for match results.
pub trait HistoryStore {
    /// Records a terminal outcome.
    fn record(&mut self, outcome: GameOutcome, human_mark: Player) -> Result<(), HistoryError>;

    /// Returns the accumulated tally.
    fn tally(&self) -> Result<Tally, HistoryError>;
}

/// Tally held in memory, lost when dropped.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    tally: Tally,
}

impl InMemoryHistory {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistory {
    fn record(&mut self, outcome: GameOutcome, human_mark: Player) -> Result<(), HistoryError> {
        self.tally.record(outcome, human_mark);
        Ok(())
    }

    fn tally(&self) -> Result<Tally, HistoryError> {
        Ok(self.tally)
    }
}

/// Tally persisted as a JSON file.
///
/// A missing file reads as an empty tally; every record rewrites the file.
#[derive(Debug)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    /// Creates a store backed by the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Tally, HistoryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Tally::default()),
            Err(err) => Err(err.into()),
        }
    }
}

impl HistoryStore for FileHistory {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn record(&mut self, outcome: GameOutcome, human_mark: Player) -> Result<(), HistoryError> {
        let mut tally = self.load()?;
        tally.record(outcome, human_mark);
        std::fs::write(&self.path, serde_json::to_string_pretty(&tally)?)?;
        debug!(?outcome, "recorded result");
        Ok(())
    }

    fn tally(&self) -> Result<Tally, HistoryError> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_keys_on_human_mark() {
        let mut tally = Tally::default();
        tally.record(GameOutcome::Win(Player::X), Player::X);
        tally.record(GameOutcome::Win(Player::O), Player::X);
        tally.record(GameOutcome::Draw, Player::X);
        tally.record(GameOutcome::InProgress, Player::X);
        assert_eq!(
            tally,
            Tally {
                wins: 1,
                losses: 1,
                draws: 1
            }
        );
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_in_memory_store_accumulates() {
        let mut store = InMemoryHistory::new();
        store.record(GameOutcome::Win(Player::O), Player::O).unwrap();
        store.record(GameOutcome::Win(Player::O), Player::O).unwrap();
        assert_eq!(store.tally().unwrap().wins, 2);
    }
}
