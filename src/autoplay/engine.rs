//! Automatic round player

use super::strategy::Guesser;
use crate::core::{RoundState, RoundStatus};
use rand::Rng;
use tracing::trace;

/// Result of an automatically played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoRound {
    pub word: String,
    pub status: RoundStatus,
    pub guesses: usize,
    pub errors: u32,
}

/// Play a round to completion with the given guesser
///
/// Stops early (still `AwaitingGuess`) if the guesser runs out of letters.
pub fn play_round<G: Guesser, R: Rng>(
    guesser: &G,
    mut round: RoundState,
    rng: &mut R,
) -> AutoRound {
    while !round.status().is_over() {
        let Some(letter) = guesser.select_letter(&round, rng) else {
            break;
        };
        let notice = round.submit(&letter.to_string());
        trace!(%letter, %notice, "auto guess");
    }

    AutoRound {
        word: round.target().text().to_string(),
        status: round.status(),
        guesses: round.player_guesses().count(),
        errors: round.error_count(),
    }
}
