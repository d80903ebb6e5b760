//! Matchdays: the games played together in one round

use serde::{Deserialize, Serialize};

use crate::game::Match;
use crate::participant::ParticipantId;

/// All games of one round, plus the player sitting out when the roster is odd
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchday {
    pub matches: Vec<Match>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bye: Option<ParticipantId>,
}

impl Matchday {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// True once every game of the round has a result
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(Match::is_decided)
    }

    /// The game `id` plays on this matchday, if any
    pub fn match_of(&self, id: ParticipantId) -> Option<&Match> {
        self.matches.iter().find(|m| m.involves(id))
    }
}
