//! Circle-method round robin over slot indices
//!
//! Slot 0 stays fixed. The remaining `n - 1` slots form a rotation buffer
//! that is laid out twice end to end, so matchday `d` can read
//! `buffer[d ..]` without wrapping. Colors alternate by a fixed rule: the
//! anchor's game is flipped on odd matchdays and every even-numbered board
//! after it is flipped, which keeps the color split close to even without a
//! separate balancing pass.
//!
//! The functions here know nothing about players. The tournament maps slots
//! to participants (and to the bye sentinel when the roster is odd).

use crate::error::{Result, TournamentError};

/// One board of a matchday, as slot indices.
///
/// `first`/`second` is the order before the color flip. Match construction
/// uses that order for the handicap and then applies `swap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPairing {
    pub first: usize,
    pub second: usize,
    pub swap: bool,
}

impl SlotPairing {
    /// Slot that ends up with white
    pub fn white(&self) -> usize {
        if self.swap { self.second } else { self.first }
    }

    /// Slot that ends up with black
    pub fn black(&self) -> usize {
        if self.swap { self.first } else { self.second }
    }

    pub fn contains(&self, slot: usize) -> bool {
        self.first == slot || self.second == slot
    }
}

/// Generate all matchdays for `slots` entrants.
///
/// Returns `slots - 1` matchdays of `slots / 2` boards each. With an even
/// slot count every unordered pair of slots meets exactly once. Fails when
/// fewer than two slots are given.
pub fn circle_rounds(slots: usize) -> Result<Vec<Vec<SlotPairing>>> {
    if slots < 2 {
        return Err(TournamentError::NotEnoughParticipants { count: slots });
    }

    let rotation: Vec<usize> = (1..slots).chain(1..slots).collect();
    let boards = slots / 2;

    let rounds = (0..slots - 1)
        .map(|day| {
            let mut pairings = Vec::with_capacity(boards);
            pairings.push(SlotPairing {
                first: 0,
                second: rotation[day],
                swap: day % 2 != 0,
            });
            for i in 1..boards {
                pairings.push(SlotPairing {
                    first: rotation[slots - 1 - i + day],
                    second: rotation[day + i],
                    swap: i % 2 == 0,
                });
            }
            pairings
        })
        .collect();

    Ok(rounds)
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
