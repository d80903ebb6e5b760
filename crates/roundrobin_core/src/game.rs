//! A single scheduled game and its result

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TournamentError};
use crate::handicap::{apply_handicap, TimeControl};
use crate::participant::{Participant, ParticipantId};

/// Result of a game, from the board's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchResult {
    #[default]
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw,
}

impl MatchResult {
    /// True once a winner or a draw has been recorded
    pub fn is_decided(self) -> bool {
        self != MatchResult::Ongoing
    }

    /// Short PGN-style notation
    pub fn notation(self) -> &'static str {
        match self {
            MatchResult::Ongoing => "*",
            MatchResult::WhiteWins => "1-0",
            MatchResult::BlackWins => "0-1",
            MatchResult::Draw => "1/2-1/2",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchResult::Ongoing => "ONGOING",
            MatchResult::WhiteWins => "WHITE_WINS",
            MatchResult::BlackWins => "BLACK_WINS",
            MatchResult::Draw => "DRAW",
        };
        f.write_str(name)
    }
}

impl FromStr for MatchResult {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1-0" | "white" | "white_wins" => Ok(MatchResult::WhiteWins),
            "0-1" | "black" | "black_wins" => Ok(MatchResult::BlackWins),
            "1/2-1/2" | "½-½" | "draw" | "remis" => Ok(MatchResult::Draw),
            "*" | "ongoing" => Ok(MatchResult::Ongoing),
            _ => Err(TournamentError::InvalidResult(s.to_string())),
        }
    }
}

/// One game between two registered participants.
///
/// Slot 0 plays white and moves first, slot 1 plays black. `time_limits`
/// follows the same order and always belongs to the player in that slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub opponents: [ParticipantId; 2],
    pub result: MatchResult,
    /// Thinking time in minutes, `[white, black]`
    pub time_limits: [i64; 2],
}

impl Match {
    /// Pair `white` against `black` and assign the rating handicap.
    pub fn new(
        white: (ParticipantId, &Participant),
        black: (ParticipantId, &Participant),
        time_control: &TimeControl,
    ) -> Self {
        let mut time_limits = time_control.base_limits();
        apply_handicap(
            [white.1.rating(), black.1.rating()],
            &mut time_limits,
            time_control.handicap_per_mille,
        );
        Self {
            opponents: [white.0, black.0],
            result: MatchResult::Ongoing,
            time_limits,
        }
    }

    pub fn white(&self) -> ParticipantId {
        self.opponents[0]
    }

    pub fn black(&self) -> ParticipantId {
        self.opponents[1]
    }

    pub fn involves(&self, id: ParticipantId) -> bool {
        self.opponents.contains(&id)
    }

    pub fn is_decided(&self) -> bool {
        self.result.is_decided()
    }

    /// Exchange colors. Each player keeps their own time allowance.
    pub fn swap_opponents(&mut self) {
        self.opponents.swap(0, 1);
        self.time_limits.swap(0, 1);
    }

    /// Record a decided outcome. `Ongoing` is not an outcome and is rejected;
    /// use [`Match::clear_result`] to undo a recorded result.
    pub fn set_result(&mut self, result: MatchResult) -> Result<()> {
        if !result.is_decided() {
            return Err(TournamentError::InvalidResult(result.to_string()));
        }
        self.record(result);
        Ok(())
    }

    pub fn white_wins(&mut self) {
        self.record(MatchResult::WhiteWins);
    }

    pub fn black_wins(&mut self) {
        self.record(MatchResult::BlackWins);
    }

    pub fn draw(&mut self) {
        self.record(MatchResult::Draw);
    }

    fn record(&mut self, result: MatchResult) {
        self.result = result;
        tracing::trace!(white = %self.white(), black = %self.black(), %result, "match result set");
    }

    /// Put the game back to ongoing
    pub fn clear_result(&mut self) {
        self.result = MatchResult::Ongoing;
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
