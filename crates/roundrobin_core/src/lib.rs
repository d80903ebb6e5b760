//! Round-robin chess tournaments
//!
//! This crate provides:
//! - Participants with validated ratings
//! - A circle-method pairing scheduler with alternating colors and byes for odd rosters
//! - Rating-based time handicaps per game
//! - A scoreboard that can be recomputed from recorded results at any time
//!
//! No I/O happens here. Printing, persistence and the CLI live in the
//! `tournament` crate.
//!
//! # Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use roundrobin_core::{MatchResult, Participant, Tournament};
//!
//! let mut t = Tournament::new(
//!     NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
//! );
//! t.add_participants(vec![
//!     Participant::new("John", "Apple", 1450).unwrap(),
//!     Participant::new("Jane", "Flowers", 1750).unwrap(),
//! ]);
//! t.generate_schedule().unwrap();
//! t.set_result(0, 0, MatchResult::Draw).unwrap();
//! t.evaluate_all().unwrap();
//! ```

pub mod error;
pub mod game;
pub mod handicap;
pub mod pairing;
pub mod participant;
pub mod schedule;
pub mod scoring;
pub mod tournament;

pub use error::{Result, TournamentError};
pub use game::{Match, MatchResult};
pub use handicap::{apply_handicap, rating_handicap, TimeControl};
pub use pairing::{circle_rounds, SlotPairing};
pub use participant::{Participant, ParticipantId, DEFAULT_RATING};
pub use schedule::Matchday;
pub use scoring::{MatchEvaluation, Scoreboard, ScoringRules, Standing};
pub use tournament::{Registration, Tournament};
