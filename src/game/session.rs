//! Interactive session state
//!
//! Owns the catalog, the random source and the current round for a hosting
//! UI, and keeps win/loss statistics across rounds.

use super::{GameConfig, RoundView, render, restart};
use crate::catalog::Catalog;
use crate::core::{Notice, RoundState, RoundStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Outcomes of finished rounds
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl Statistics {
    /// Win percentage (0-100), zero before any round finished
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

/// One player's game session
pub struct Session {
    catalog: Catalog,
    config: GameConfig,
    rng: StdRng,
    round: RoundState,
    stats: Statistics,
}

impl Session {
    /// Create a session and start its first round
    #[must_use]
    pub fn new(catalog: Catalog, config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        debug!(seed, "session seeded");

        let mut rng = StdRng::seed_from_u64(seed);
        let round = restart(&catalog, &mut rng, &config);

        Self {
            catalog,
            config,
            rng,
            round,
            stats: Statistics::default(),
        }
    }

    /// Submit a letter to the current round
    pub fn submit(&mut self, input: &str) -> Notice {
        let notice = self.round.submit(input);

        if notice.is_accepted() {
            match self.round.status() {
                RoundStatus::Won => {
                    self.stats.rounds_played += 1;
                    self.stats.rounds_won += 1;
                    info!(word = self.round.target().text(), "round won");
                }
                RoundStatus::Lost => {
                    self.stats.rounds_played += 1;
                    info!(word = self.round.target().text(), "round lost");
                }
                RoundStatus::AwaitingGuess => {}
            }
        }

        notice
    }

    /// Replace the current round with a fresh one
    ///
    /// An unfinished round is abandoned without counting in the statistics.
    pub fn restart(&mut self) {
        if !self.round.status().is_over() {
            debug!(word = self.round.target().text(), "round abandoned");
        }
        self.round = restart(&self.catalog, &mut self.rng, &self.config);
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn view(&self) -> RoundView {
        render(&self.round)
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
