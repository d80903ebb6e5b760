//! The tournament aggregate: roster, schedule and scoreboard
//!
//! A [`Tournament`] owns everything it needs. Its scoreboard is private state
//! derived from the match results and is never shared with another
//! tournament. The type is a plain value with no interior mutability; callers
//! that want shared access across threads wrap it in their own lock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};
use crate::game::{Match, MatchResult};
use crate::handicap::TimeControl;
use crate::pairing::circle_rounds;
use crate::participant::{Participant, ParticipantId};
use crate::schedule::Matchday;
use crate::scoring::{MatchEvaluation, Scoreboard, ScoringRules, Standing};

/// One participant or an ordered batch of them, for [`Tournament::add_participants`]
#[derive(Debug, Clone)]
pub enum Registration {
    One(Participant),
    Many(Vec<Participant>),
}

impl From<Participant> for Registration {
    fn from(participant: Participant) -> Self {
        Registration::One(participant)
    }
}

impl From<Vec<Participant>> for Registration {
    fn from(participants: Vec<Participant>) -> Self {
        Registration::Many(participants)
    }
}

impl<const N: usize> From<[Participant; N]> for Registration {
    fn from(participants: [Participant; N]) -> Self {
        Registration::Many(participants.into())
    }
}

impl From<&[Participant]> for Registration {
    fn from(participants: &[Participant]) -> Self {
        Registration::Many(participants.to_vec())
    }
}

impl IntoIterator for Registration {
    type Item = Participant;
    type IntoIter = std::vec::IntoIter<Participant>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Registration::One(participant) => vec![participant].into_iter(),
            Registration::Many(participants) => participants.into_iter(),
        }
    }
}

/// A round-robin chess tournament.
///
/// Deserializing checks every scheduled game with [`Tournament::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTournament")]
pub struct Tournament {
    start_date: NaiveDate,
    /// Not checked against `start_date`
    end_date: NaiveDate,
    participants: Vec<Participant>,
    matchdays: Vec<Matchday>,
    #[serde(default)]
    pub scoring: ScoringRules,
    #[serde(default)]
    pub time_control: TimeControl,
    /// Rebuilt by `evaluate_all`; not persisted
    #[serde(skip)]
    scoreboard: Scoreboard,
    /// Roster size the current schedule was generated for
    #[serde(default)]
    scheduled_roster: Option<usize>,
}

impl Tournament {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            participants: Vec::new(),
            matchdays: Vec::new(),
            scoring: ScoringRules::default(),
            time_control: TimeControl::default(),
            scoreboard: Scoreboard::default(),
            scheduled_roster: None,
        }
    }

    /// Build from ISO `YYYY-MM-DD` date strings
    pub fn from_date_strs(start_date: &str, end_date: &str) -> Result<Self> {
        let parse = |s: &str| {
            s.trim()
                .parse::<NaiveDate>()
                .map_err(|_| TournamentError::InvalidDate(s.to_string()))
        };
        Ok(Self::new(parse(start_date)?, parse(end_date)?))
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    // =========================================================================
    // Roster
    // =========================================================================

    /// Register one participant or a batch, keeping their order.
    ///
    /// Returns the ids handed out. The scoreboard is not touched; call
    /// [`Tournament::reset_scoreboard`] or regenerate the schedule before
    /// trusting it again.
    pub fn add_participants(&mut self, registration: impl Into<Registration>) -> Vec<ParticipantId> {
        let registration: Registration = registration.into();
        let start = self.participants.len();
        self.participants.extend(registration);
        (start..self.participants.len()).map(ParticipantId).collect()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(id.0)
    }

    /// Ids of all registered participants, in registration order
    pub fn participant_ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        (0..self.participants.len()).map(ParticipantId)
    }

    // =========================================================================
    // Schedule
    // =========================================================================

    /// Generate the full round robin and reset the scoreboard.
    ///
    /// An even roster of N gives N - 1 matchdays of N / 2 games. An odd roster
    /// gets a bye slot appended, which gives N matchdays where one player
    /// sits out each round. Any previous schedule and its results are
    /// replaced.
    pub fn generate_schedule(&mut self) -> Result<()> {
        let count = self.participants.len();
        if count < 2 {
            return Err(TournamentError::NotEnoughParticipants { count });
        }

        // The bye sentinel takes slot `count` when the roster is odd
        let slots = count + count % 2;
        let rounds = circle_rounds(slots)?;

        let matchdays: Vec<Matchday> = rounds
            .into_iter()
            .map(|round| {
                let mut day = Matchday::default();
                for pairing in round {
                    if pairing.contains(count) {
                        let sitting_out = if pairing.first == count {
                            pairing.second
                        } else {
                            pairing.first
                        };
                        day.bye = Some(ParticipantId(sitting_out));
                        continue;
                    }

                    let mut game = Match::new(
                        self.entrant(pairing.first),
                        self.entrant(pairing.second),
                        &self.time_control,
                    );
                    if pairing.swap {
                        game.swap_opponents();
                    }
                    day.matches.push(game);
                }
                day
            })
            .collect();

        tracing::debug!(
            participants = count,
            matchdays = matchdays.len(),
            bye = slots != count,
            "round robin schedule generated"
        );

        self.matchdays = matchdays;
        self.scheduled_roster = Some(count);
        self.reset_scoreboard();
        Ok(())
    }

    fn entrant(&self, slot: usize) -> (ParticipantId, &Participant) {
        (ParticipantId(slot), &self.participants[slot])
    }

    /// True when participants were registered after the schedule was generated.
    ///
    /// Nothing regenerates automatically; a stale schedule simply leaves the
    /// new participants without games.
    pub fn is_schedule_stale(&self) -> bool {
        self.scheduled_roster
            .is_some_and(|count| count != self.participants.len())
    }

    pub fn matchdays(&self) -> &[Matchday] {
        &self.matchdays
    }

    pub fn matchday_mut(&mut self, matchday: usize) -> Option<&mut Matchday> {
        self.matchdays.get_mut(matchday)
    }

    /// Every game of the schedule in order, matchday by matchday
    pub fn matches(&self) -> impl Iterator<Item = &Match> + '_ {
        self.matchdays.iter().flat_map(|day| day.matches.iter())
    }

    /// Game `index` of `matchday`, both 0-based
    pub fn match_mut(&mut self, matchday: usize, index: usize) -> Result<&mut Match> {
        self.matchdays
            .get_mut(matchday)
            .and_then(|day| day.matches.get_mut(index))
            .ok_or(TournamentError::MatchNotFound { matchday, index })
    }

    /// Record a result for game `index` of `matchday`, both 0-based
    pub fn set_result(&mut self, matchday: usize, index: usize, result: MatchResult) -> Result<()> {
        self.match_mut(matchday, index)?.set_result(result)
    }

    /// Check that every game pairs two distinct registered participants and
    /// every bye names a registered participant who is not playing that day.
    pub fn validate(&self) -> Result<()> {
        let registered = |id: ParticipantId| {
            if id.0 < self.participants.len() {
                Ok(())
            } else {
                Err(TournamentError::UnknownParticipant(id))
            }
        };

        for (matchday, day) in self.matchdays.iter().enumerate() {
            for (index, game) in day.matches.iter().enumerate() {
                registered(game.white())?;
                registered(game.black())?;
                if game.white() == game.black() {
                    return Err(TournamentError::InvalidPairing { matchday, index });
                }
            }
            if let Some(bye) = day.bye {
                registered(bye)?;
                if let Some(index) = day.matches.iter().position(|m| m.involves(bye)) {
                    return Err(TournamentError::InvalidPairing { matchday, index });
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Scoring
    // =========================================================================

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn standing(&self, id: ParticipantId) -> Option<Standing> {
        self.scoreboard.get(id)
    }

    /// Zero the scoreboard with one entry per registered participant
    pub fn reset_scoreboard(&mut self) {
        self.scoreboard = Scoreboard::new(self.participant_ids());
        tracing::trace!(entries = self.scoreboard.len(), "scoreboard reset");
    }

    /// Add one game's result to the scoreboard and report what was awarded.
    ///
    /// The scoreboard does not remember which games it has seen, so evaluating
    /// the same decided game twice counts it twice. Use
    /// [`Tournament::evaluate_all`] for a consistent recount.
    pub fn evaluate_match(&mut self, game: &Match) -> Result<MatchEvaluation> {
        self.scoreboard.record(&self.scoring, game)
    }

    /// Rebuild the scoreboard from every recorded result, in schedule order.
    pub fn evaluate_all(&mut self) -> Result<()> {
        let mut scoreboard = Scoreboard::new(self.participant_ids());
        for game in self.matches() {
            scoreboard.record(&self.scoring, game)?;
        }
        self.scoreboard = scoreboard;

        tracing::debug!(
            decided = self.matches().filter(|m| m.is_decided()).count(),
            "scoreboard evaluated"
        );
        Ok(())
    }
}

/// Unvalidated wire form, checked on the way in
#[derive(Deserialize)]
struct RawTournament {
    start_date: NaiveDate,
    end_date: NaiveDate,
    participants: Vec<Participant>,
    matchdays: Vec<Matchday>,
    #[serde(default)]
    scoring: ScoringRules,
    #[serde(default)]
    time_control: TimeControl,
    #[serde(default)]
    scheduled_roster: Option<usize>,
}

impl TryFrom<RawTournament> for Tournament {
    type Error = TournamentError;

    fn try_from(raw: RawTournament) -> Result<Self> {
        let tournament = Self {
            start_date: raw.start_date,
            end_date: raw.end_date,
            participants: raw.participants,
            matchdays: raw.matchdays,
            scoring: raw.scoring,
            time_control: raw.time_control,
            scoreboard: Scoreboard::default(),
            scheduled_roster: raw.scheduled_roster,
        };
        tournament.validate()?;
        Ok(tournament)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
