//! Scoreboard and point awards
//!
//! The scoreboard is a cache derived from match results. It is rebuilt from
//! scratch by `Tournament::evaluate_all`, which is the only way to get a
//! consistent view after results change. `record` adds a single game on top
//! of whatever is already there and does not remember what it has counted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, TournamentError};
use crate::game::{Match, MatchResult};
use crate::participant::ParticipantId;

/// Default points for a win
pub const SCORE_WIN: u32 = 3;

/// Default points for a draw
pub const SCORE_DRAW: u32 = 1;

/// Points awarded per decided game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub win: u32,
    pub draw: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            win: SCORE_WIN,
            draw: SCORE_DRAW,
        }
    }
}

impl ScoringRules {
    /// Points for `[white, black]` given a result
    pub fn award(&self, result: MatchResult) -> [u32; 2] {
        match result {
            MatchResult::Ongoing => [0, 0],
            MatchResult::WhiteWins => [self.win, 0],
            MatchResult::BlackWins => [0, self.win],
            MatchResult::Draw => [self.draw, self.draw],
        }
    }
}

/// Games played and points collected by one participant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub games: u32,
    pub score: u32,
}

/// What a single evaluation awarded, in board order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvaluation {
    pub opponents: [ParticipantId; 2],
    pub scores: [u32; 2],
}

/// Per-participant standings, keyed by roster identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    entries: BTreeMap<ParticipantId, Standing>,
}

impl Scoreboard {
    /// Fresh board with a zeroed entry for every id
    pub fn new(ids: impl IntoIterator<Item = ParticipantId>) -> Self {
        Self {
            entries: ids.into_iter().map(|id| (id, Standing::default())).collect(),
        }
    }

    pub fn get(&self, id: ParticipantId) -> Option<Standing> {
        self.entries.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in roster order
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, Standing)> + '_ {
        self.entries.iter().map(|(&id, &standing)| (id, standing))
    }

    /// Standings sorted by score (highest first), then fewer games, then roster order
    pub fn leaderboard(&self) -> Vec<(ParticipantId, Standing)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by(|a, b| {
            b.1.score
                .cmp(&a.1.score)
                .then(a.1.games.cmp(&b.1.games))
                .then(a.0.cmp(&b.0))
        });
        rows
    }

    /// Add one game's points to the board.
    ///
    /// Ongoing games award nothing and leave the board untouched. Calling
    /// this twice for the same decided game counts it twice. Totals saturate
    /// at `u32::MAX`.
    pub fn record(&mut self, rules: &ScoringRules, game: &Match) -> Result<MatchEvaluation> {
        let scores = rules.award(game.result);
        let evaluation = MatchEvaluation {
            opponents: game.opponents,
            scores,
        };

        for id in game.opponents {
            if !self.entries.contains_key(&id) {
                return Err(TournamentError::UnknownParticipant(id));
            }
        }

        if !game.is_decided() {
            return Ok(evaluation);
        }

        for (id, points) in game.opponents.into_iter().zip(scores) {
            if let Some(standing) = self.entries.get_mut(&id) {
                standing.games = standing.games.saturating_add(1);
                standing.score = standing.score.saturating_add(points);
            }
        }

        Ok(evaluation)
    }
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod scoring_tests;
