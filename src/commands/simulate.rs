//! Simulation command
//!
//! Plays many seeded rounds with an automatic guesser and collects statistics.

use crate::autoplay::{AutoRound, Guesser, play_round};
use crate::catalog::Catalog;
use crate::core::RoundStatus;
use crate::game::{GameConfig, restart};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub rounds: usize,
    pub game: GameConfig,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(rounds: usize, game: GameConfig) -> Self {
        Self {
            rounds,
            game,
            show_progress: true,
        }
    }
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub guesser: String,
    pub seed: u64,
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub error_limit: u32,
    /// Rounds won, keyed by errors made
    pub error_distribution: FxHashMap<u32, usize>,
    pub average_guesses: f64,
    pub hardest_words: Vec<(String, usize)>,
    pub duration: Duration,
}

impl SimulationResult {
    /// Win percentage (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.rounds as f64 * 100.0
        }
    }
}

/// Play `config.rounds` rounds in parallel
///
/// Round `i` draws its target with a generator seeded from `seed + i`, so a
/// run is reproducible for a given seed regardless of thread scheduling.
pub fn run_simulation<G: Guesser + Sync>(
    catalog: &Catalog,
    guesser: &G,
    guesser_name: &str,
    config: &SimulateConfig,
) -> SimulationResult {
    let seed = config.game.seed.unwrap_or_else(rand::random);
    info!(rounds = config.rounds, seed, guesser = guesser_name, "simulation started");

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results: Vec<AutoRound> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let round = restart(catalog, &mut rng, &config.game);
            let result = play_round(guesser, round, &mut rng);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let won = results
        .iter()
        .filter(|r| r.status == RoundStatus::Won)
        .count();

    let mut error_distribution: FxHashMap<u32, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.status == RoundStatus::Won) {
        *error_distribution.entry(result.errors).or_insert(0) += 1;
    }

    let average_guesses = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.guesses).sum::<usize>() as f64 / results.len() as f64
    };

    let mut losses_by_word: FxHashMap<&str, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.status != RoundStatus::Won) {
        *losses_by_word.entry(result.word.as_str()).or_insert(0) += 1;
    }
    let mut hardest_words: Vec<(String, usize)> = losses_by_word
        .into_iter()
        .map(|(word, n)| (word.to_string(), n))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(10);

    info!(won, rounds = results.len(), "simulation finished");

    SimulationResult {
        guesser: guesser_name.to_string(),
        seed,
        rounds: results.len(),
        won,
        lost: results.len() - won,
        error_limit: config.game.error_limit,
        error_distribution,
        average_guesses,
        hardest_words,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::{AlphabeticalGuesser, CandidateGuesser};

    fn config(rounds: usize, error_limit: u32) -> SimulateConfig {
        SimulateConfig {
            rounds,
            game: GameConfig {
                error_limit,
                seed: Some(2024),
            },
            show_progress: false,
        }
    }

    #[test]
    fn simulation_runs() {
        let catalog = Catalog::embedded().unwrap();
        let guesser = CandidateGuesser::from_catalog(&catalog);
        let result = run_simulation(&catalog, &guesser, "candidate", &config(40, 5));

        assert_eq!(result.rounds, 40);
        assert_eq!(result.won + result.lost, 40);
        assert_eq!(result.seed, 2024);
        assert!(result.average_guesses >= 1.0);
    }

    #[test]
    fn distribution_sums_to_wins() {
        let catalog = Catalog::embedded().unwrap();
        let guesser = CandidateGuesser::from_catalog(&catalog);
        let result = run_simulation(&catalog, &guesser, "candidate", &config(30, 5));

        let distribution_sum: usize = result.error_distribution.values().sum();
        assert_eq!(distribution_sum, result.won);
        assert!(result.error_distribution.keys().all(|&e| e < 5));
    }

    #[test]
    fn simulation_is_reproducible() {
        let catalog = Catalog::embedded().unwrap();
        let guesser = AlphabeticalGuesser::from_catalog(&catalog);
        let a = run_simulation(&catalog, &guesser, "alphabetical", &config(25, 5));
        let b = run_simulation(&catalog, &guesser, "alphabetical", &config(25, 5));

        assert_eq!(a.won, b.won);
        assert_eq!(a.hardest_words, b.hardest_words);
        assert_eq!(a.error_distribution, b.error_distribution);
    }

    #[test]
    fn candidate_beats_alphabetical() {
        let catalog = Catalog::embedded().unwrap();
        let smart = CandidateGuesser::from_catalog(&catalog);
        let naive = AlphabeticalGuesser::from_catalog(&catalog);

        let smart = run_simulation(&catalog, &smart, "candidate", &config(60, 3));
        let naive = run_simulation(&catalog, &naive, "alphabetical", &config(60, 3));
        assert!(smart.won >= naive.won);
    }

    #[test]
    fn empty_simulation() {
        let catalog = Catalog::embedded().unwrap();
        let guesser = CandidateGuesser::from_catalog(&catalog);
        let result = run_simulation(&catalog, &guesser, "candidate", &config(0, 5));

        assert_eq!(result.rounds, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
