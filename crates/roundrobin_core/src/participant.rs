//! Tournament participants and their identity
//!
//! A [`Participant`] is a plain value (names and rating). Identity inside a
//! tournament comes from the [`ParticipantId`] handed out at registration, so
//! two players with the same name and rating are still different entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TournamentError};

/// Rating assumed when none is given
pub const DEFAULT_RATING: i64 = 1000;

/// Handle to a registered participant (its position in the roster)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub(crate) usize);

impl ParticipantId {
    /// Roster position, 0-based
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A chess player taking part in a tournament.
///
/// The rating is validated on every write and can never be negative.
/// Equality compares fields only. It is not identity; key on [`ParticipantId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParticipant")]
pub struct Participant {
    pub first_name: String,
    pub last_name: String,
    rating: i64,
}

impl Participant {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, rating: i64) -> Result<Self> {
        check_rating(rating)?;
        Ok(Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            rating,
        })
    }

    /// Create a participant rated [`DEFAULT_RATING`]
    pub fn with_default_rating(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            rating: DEFAULT_RATING,
        }
    }

    /// Full display name, "first last"
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn rating(&self) -> i64 {
        self.rating
    }

    /// Replace the rating. A negative value is rejected and the old rating kept.
    pub fn set_rating(&mut self, rating: i64) -> Result<()> {
        check_rating(rating)?;
        self.rating = rating;
        Ok(())
    }
}

fn check_rating(rating: i64) -> Result<()> {
    if rating < 0 {
        return Err(TournamentError::InvalidRating(rating));
    }
    Ok(())
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Parse a roster line: `"First Last:1450"`, or `"First Last"` for the default rating.
///
/// The last whitespace-separated word is the last name, everything before it
/// the first name.
impl FromStr for Participant {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self> {
        let (names, rating) = match s.rsplit_once(':') {
            Some((names, rating)) => {
                let rating = rating
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| TournamentError::InvalidArgumentType(s.to_string()))?;
                (names, rating)
            }
            None => (s, DEFAULT_RATING),
        };

        let names = names.trim();
        let (first, last) = names
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| TournamentError::InvalidArgumentType(s.to_string()))?;
        let first = first.trim();
        if first.is_empty() || last.is_empty() {
            return Err(TournamentError::InvalidArgumentType(s.to_string()));
        }

        Participant::new(first, last, rating)
    }
}

/// Unvalidated wire form, checked on the way in
#[derive(Deserialize)]
struct RawParticipant {
    first_name: String,
    last_name: String,
    #[serde(default = "default_rating")]
    rating: i64,
}

fn default_rating() -> i64 {
    DEFAULT_RATING
}

impl TryFrom<RawParticipant> for Participant {
    type Error = TournamentError;

    fn try_from(raw: RawParticipant) -> Result<Self> {
        Participant::new(raw.first_name, raw.last_name, raw.rating)
    }
}

#[cfg(test)]
#[path = "participant_tests.rs"]
mod participant_tests;
