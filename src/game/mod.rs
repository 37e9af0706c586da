//! Game operations
//!
//! The interface a hosting UI drives: start a round, submit a letter, and
//! project the round for display. State is an explicit `RoundState` value
//! owned by the caller.

mod session;

pub use session::{Session, Statistics};

use crate::catalog::{Catalog, select_target};
use crate::core::{DEFAULT_ERROR_LIMIT, Notice, RoundState, RoundStatus};
use rand::Rng;

/// Settings shared by every round of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub error_limit: u32,
    /// Seed for target selection; drawn at random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            error_limit: DEFAULT_ERROR_LIMIT,
            seed: None,
        }
    }
}

/// A letter the player guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessedLetter {
    pub letter: char,
    pub was_correct: bool,
}

/// Read-only projection of a round for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub display: String,
    pub is_won: bool,
    pub is_lost: bool,
    pub errors_used: u32,
    pub error_limit: u32,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub hint: &'static str,
    /// Characters in the target, separators included
    pub letter_count: usize,
    /// Player guesses in order, auto-revealed separators excluded
    pub guessed: Vec<GuessedLetter>,
    /// The target word, only once the round is over
    pub answer: Option<String>,
}

impl RoundView {
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_won || self.is_lost
    }
}

/// Start a fresh round on a randomly selected target
///
/// # Examples
/// ```
/// use hangword::catalog::Catalog;
/// use hangword::game::{GameConfig, render, restart};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let catalog = Catalog::embedded().unwrap();
/// let round = restart(&catalog, &mut StdRng::seed_from_u64(3), &GameConfig::default());
///
/// let view = render(&round);
/// assert_eq!(view.errors_used, 0);
/// assert_eq!(view.error_limit, 5);
/// assert!(view.guessed.is_empty());
/// ```
pub fn restart<R: Rng>(catalog: &Catalog, rng: &mut R, config: &GameConfig) -> RoundState {
    RoundState::new(select_target(catalog, rng), config.error_limit)
}

/// Apply one submission and hand back the updated round with its notice
#[must_use]
pub fn submit_letter(state: RoundState, input: &str) -> (RoundState, Notice) {
    let mut state = state;
    let notice = state.submit(input);
    (state, notice)
}

/// Project a round for presentation
#[must_use]
pub fn render(state: &RoundState) -> RoundView {
    let status = state.status();
    let target = state.target();

    RoundView {
        display: state.display(),
        is_won: status == RoundStatus::Won,
        is_lost: status == RoundStatus::Lost,
        errors_used: state.error_count(),
        error_limit: state.error_limit(),
        category: target.category_label(),
        subcategory: target.subcategory_label(),
        hint: target.hint(),
        letter_count: target.char_count(),
        guessed: state
            .player_guesses()
            .map(|g| GuessedLetter {
                letter: g.letter,
                was_correct: g.was_correct,
            })
            .collect(),
        answer: status.is_over().then(|| target.text().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, FoodKind, TargetWord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round(text: &str, limit: u32) -> RoundState {
        let target = TargetWord::new(text, Category::Food(FoodKind::Fruit)).unwrap();
        RoundState::new(target, limit)
    }

    #[test]
    fn submit_letter_threads_state() {
        let state = round("banana", 5);
        let (state, notice) = submit_letter(state, "a");
        assert_eq!(notice, Notice::Found('a'));
        let (state, notice) = submit_letter(state, "a");
        assert_eq!(notice, Notice::Duplicate('a'));
        let (state, notice) = submit_letter(state, "");
        assert_eq!(notice, Notice::InvalidInput);
        assert_eq!(render(&state).display, "?a?a?a");
    }

    #[test]
    fn render_in_progress() {
        let (state, _) = submit_letter(round("Banana", 5), "z");
        let (state, _) = submit_letter(state, "n");
        let view = render(&state);

        assert_eq!(view.display, "??n?n?");
        assert!(!view.is_won);
        assert!(!view.is_lost);
        assert!(!view.is_over());
        assert_eq!(view.errors_used, 1);
        assert_eq!(view.error_limit, 5);
        assert_eq!(view.category, "Food");
        assert_eq!(view.subcategory, "Fruit");
        assert_eq!(view.hint, "Maybe you like this fruit.");
        assert_eq!(view.letter_count, 6);
        assert_eq!(
            view.guessed,
            vec![
                GuessedLetter {
                    letter: 'z',
                    was_correct: false,
                },
                GuessedLetter {
                    letter: 'n',
                    was_correct: true,
                },
            ]
        );
        assert_eq!(view.answer, None);
    }

    #[test]
    fn render_won() {
        let mut state = round("ox", 5);
        for input in ["o", "x"] {
            state = submit_letter(state, input).0;
        }
        let view = render(&state);
        assert!(view.is_won);
        assert!(!view.is_lost);
        assert_eq!(view.answer.as_deref(), Some("ox"));
    }

    #[test]
    fn render_lost() {
        let (state, _) = submit_letter(round("abc", 1), "x");
        let view = render(&state);
        assert!(view.is_lost);
        assert!(!view.is_won);
        assert_eq!(view.errors_used, 1);
        assert_eq!(view.answer.as_deref(), Some("abc"));
    }

    #[test]
    fn restart_gives_fresh_round() {
        let catalog = Catalog::embedded().unwrap();
        let config = GameConfig {
            error_limit: 3,
            seed: None,
        };
        let mut rng = StdRng::seed_from_u64(11);

        let mut state = restart(&catalog, &mut rng, &config);
        for input in ["q", "x", "z", "k", "w", "y"] {
            state = submit_letter(state, input).0;
        }
        assert!(state.player_guesses().count() > 0);

        let fresh = restart(&catalog, &mut rng, &config);
        let view = render(&fresh);
        assert_eq!(view.errors_used, 0);
        assert_eq!(view.error_limit, 3);
        assert!(view.guessed.is_empty());
        assert_eq!(fresh.guesses().len(), 4);
        assert!(catalog.words().any(|w| w == fresh.target()));
    }

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.error_limit, 5);
        assert_eq!(config.seed, None);
    }
}
