//! Saved tournament state

use anyhow::{Context, Result};
use roundrobin_core::Tournament;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named tournament as written to disk.
///
/// The scoreboard is not stored. [`TournamentState::load`] recomputes it from
/// the saved results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentState {
    pub name: String,
    pub tournament: Tournament,
}

impl TournamentState {
    pub fn new(name: &str, tournament: Tournament) -> Self {
        Self {
            name: name.to_string(),
            tournament,
        }
    }

    /// Save state to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize tournament")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load state from a JSON file, scoreboard evaluated
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut state: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        state.tournament.evaluate_all()?;
        Ok(state)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
