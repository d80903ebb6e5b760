//! Error type shared by every tournament operation

use thiserror::Error;

use crate::participant::ParticipantId;

/// Everything that can go wrong while building or scoring a tournament.
///
/// Errors are raised at the point of violation and never recovered
/// internally. An operation that returns one leaves the tournament as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    /// A rating below zero was supplied
    #[error("rating can not be negative (got {0})")]
    InvalidRating(i64),

    /// A value offered for registration is not a participant
    #[error("not a participant: {0:?}")]
    InvalidArgumentType(String),

    /// A result value outside the set of decided outcomes
    #[error("invalid match result: {0}")]
    InvalidResult(String),

    /// A start or end date that could not be read as a calendar date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Schedule generation needs at least two participants
    #[error("a round robin needs at least 2 participants, got {count}")]
    NotEnoughParticipants { count: usize },

    /// A participant id that is not registered in the tournament
    #[error("participant {0} is not registered")]
    UnknownParticipant(ParticipantId),

    /// A game that pairs a participant with themselves, or involves the
    /// player who has the bye that day
    #[error("match {index} on matchday {matchday} does not pair two distinct participants")]
    InvalidPairing { matchday: usize, index: usize },

    /// A matchday/game index outside the generated schedule
    #[error("no match {index} on matchday {matchday}")]
    MatchNotFound { matchday: usize, index: usize },
}

pub type Result<T> = std::result::Result<T, TournamentError>;
