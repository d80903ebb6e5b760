//! Tournament definition files
//!
//! A tournament is described in TOML:
//!
//! ```toml
//! name = "Autumn Club Championship"
//! start_date = "2025-09-01"
//! end_date = "2025-12-15"
//! # one line per player, optional
//! roster = ["Jane Flowers:1750", "Laura Howard"]
//!
//! [scoring]
//! win = 3
//! draw = 1
//!
//! [time_control]
//! base_minutes = 60
//! handicap_per_mille = 25
//!
//! [[players]]
//! first_name = "John"
//! last_name = "Apple"
//! rating = 1450
//! ```
//!
//! `[[players]]` entries are registered first, then `roster` lines, each in
//! file order.

use anyhow::{Context, Result};
use roundrobin_core::{Participant, ScoringRules, TimeControl, Tournament};
use serde::Deserialize;
use std::path::Path;

/// Parsed tournament file
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentFile {
    #[serde(default = "default_name")]
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub scoring: ScoringRules,
    #[serde(default)]
    pub time_control: TimeControl,
    #[serde(default)]
    pub players: Vec<Participant>,
    #[serde(default)]
    pub roster: Vec<String>,
}

fn default_name() -> String {
    "Round Robin".to_string()
}

impl TournamentFile {
    /// Read and parse a tournament file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Build the tournament with its full roster registered, schedule not yet generated
    pub fn into_tournament(self) -> Result<Tournament> {
        let mut tournament = Tournament::from_date_strs(&self.start_date, &self.end_date)?;
        tournament.scoring = self.scoring;
        tournament.time_control = self.time_control;

        let lines = self
            .roster
            .iter()
            .map(|line| line.parse::<Participant>())
            .collect::<Result<Vec<_>, _>>()?;

        tournament.add_participants(self.players);
        tournament.add_participants(lines);

        tracing::info!(
            name = %self.name,
            participants = tournament.participants().len(),
            "tournament loaded"
        );
        Ok(tournament)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
