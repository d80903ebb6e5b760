//! Random results for demos and dry runs
//!
//! Outcomes are drawn from the usual logistic rating expectation with a
//! fixed draw share. Ratings are only read, never updated.

use rand::Rng;
use roundrobin_core::{MatchResult, ParticipantId, Tournament};

/// Share of simulated games that end drawn
pub const DRAW_SHARE: f64 = 0.25;

/// Expected score of a player rated `rating` against `opponent`
pub fn expected_score(rating: i64, opponent: i64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) as f64 / 400.0))
}

/// Draw an outcome for `white` vs `black` ratings
pub fn random_result(white: i64, black: i64, rng: &mut impl Rng) -> MatchResult {
    let decisive = 1.0 - DRAW_SHARE;
    let white_wins = decisive * expected_score(white, black);

    let roll: f64 = rng.gen();
    if roll < white_wins {
        MatchResult::WhiteWins
    } else if roll < decisive {
        MatchResult::BlackWins
    } else {
        MatchResult::Draw
    }
}

/// Fill every ongoing game with a random result.
///
/// Recorded results are left alone. The scoreboard is re-evaluated afterwards.
/// Returns the number of games that were filled in.
pub fn simulate_ongoing(tournament: &mut Tournament, rng: &mut impl Rng) -> roundrobin_core::Result<usize> {
    let ratings: Vec<i64> = tournament.participants().iter().map(|p| p.rating()).collect();
    let rating = |id: ParticipantId| ratings[id.index()];

    let mut filled = 0;
    for day in 0..tournament.matchdays().len() {
        let Some(matchday) = tournament.matchday_mut(day) else {
            continue;
        };
        for game in matchday.matches.iter_mut().filter(|m| !m.is_decided()) {
            let result = random_result(rating(game.white()), rating(game.black()), rng);
            game.set_result(result)?;
            filled += 1;
        }
    }

    tournament.evaluate_all()?;
    tracing::info!(filled, "simulated results");
    Ok(filled)
}

#[cfg(test)]
#[path = "simulate_tests.rs"]
mod simulate_tests;
