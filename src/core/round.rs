//! Round state machine
//!
//! A round moves `AwaitingGuess -> AwaitingGuess | Won | Lost`, one accepted
//! letter at a time. Rejected input never changes the state.

use super::TargetWord;
use super::letter::{Letter, SEPARATORS};
use super::reveal::{is_fully_revealed, reveal};
use std::fmt;
use tracing::debug;

/// Errors allowed before a round is lost
pub const DEFAULT_ERROR_LIMIT: u32 = 5;

/// A recorded guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    /// Folded letter (or separator for auto-revealed entries)
    pub letter: char,
    pub was_correct: bool,
    /// Seeded at round start rather than entered by the player
    pub auto_revealed: bool,
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    AwaitingGuess,
    Won,
    Lost,
}

impl RoundStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Outcome of a letter submission, shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Empty, multi-character or non-alphabetic input
    InvalidInput,
    Duplicate(char),
    Found(char),
    NotFound(char),
    /// The round already ended; nothing is accepted until restart
    RoundOver(RoundStatus),
}

impl Notice {
    /// Check if the submission was recorded as a guess
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Found(_) | Self::NotFound(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Type a letter"),
            Self::Duplicate(c) => write!(f, "Letter '{c}' was already guessed"),
            Self::Found(c) => write!(f, "Letter '{c}' is in the word"),
            Self::NotFound(c) => write!(f, "Letter '{c}' is not in the word"),
            Self::RoundOver(RoundStatus::Won) => write!(f, "You already won! Start a new round"),
            Self::RoundOver(_) => write!(f, "The round is over. Start a new round"),
        }
    }
}

/// State of one round
///
/// Guesses are append-only. The four separators are seeded as correct,
/// auto-revealed guesses before any player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: TargetWord,
    guesses: Vec<Guess>,
    error_limit: u32,
}

impl RoundState {
    /// Start a round on the given target
    ///
    /// An error limit of zero is raised to one.
    #[must_use]
    pub fn new(target: TargetWord, error_limit: u32) -> Self {
        let guesses = SEPARATORS
            .iter()
            .map(|&letter| Guess {
                letter,
                was_correct: true,
                auto_revealed: true,
            })
            .collect();

        Self {
            target,
            guesses,
            error_limit: error_limit.max(1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    /// All recorded guesses, auto-revealed ones first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Guesses entered by the player, in order
    pub fn player_guesses(&self) -> impl Iterator<Item = &Guess> {
        self.guesses.iter().filter(|g| !g.auto_revealed)
    }

    #[inline]
    #[must_use]
    pub const fn error_limit(&self) -> u32 {
        self.error_limit
    }

    /// Number of incorrect player guesses
    #[must_use]
    pub fn error_count(&self) -> u32 {
        self.player_guesses().filter(|g| !g.was_correct).count() as u32
    }

    /// Every recorded letter, separators included
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        self.guesses.iter().map(|g| g.letter).collect()
    }

    /// Check if a folded letter has already been recorded
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guesses.iter().any(|g| g.letter == letter)
    }

    /// Current reveal of the target word
    #[must_use]
    pub fn display(&self) -> String {
        reveal(&self.target, &self.guessed_letters())
    }

    /// Evaluate the round, checking for a win before a loss
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if is_fully_revealed(&self.display()) {
            RoundStatus::Won
        } else if self.error_count() >= self.error_limit {
            RoundStatus::Lost
        } else {
            RoundStatus::AwaitingGuess
        }
    }

    /// Apply one player submission
    ///
    /// # Examples
    /// ```
    /// use hangword::core::{Category, FoodKind, Notice, RoundState, TargetWord};
    ///
    /// let target = TargetWord::new("banana", Category::Food(FoodKind::Fruit)).unwrap();
    /// let mut round = RoundState::new(target, 5);
    ///
    /// assert_eq!(round.submit("A"), Notice::Found('a'));
    /// assert_eq!(round.submit("a"), Notice::Duplicate('a'));
    /// assert_eq!(round.display(), "?a?a?a");
    /// ```
    pub fn submit(&mut self, input: &str) -> Notice {
        let status = self.status();
        if status.is_over() {
            debug!(?status, "guess rejected, round over");
            return Notice::RoundOver(status);
        }

        let letter = match Letter::parse(input) {
            Ok(letter) => letter.as_char(),
            Err(err) => {
                debug!(%err, "guess rejected");
                return Notice::InvalidInput;
            }
        };

        if self.has_guessed(letter) {
            return Notice::Duplicate(letter);
        }

        let was_correct = self.target.contains(letter);
        self.guesses.push(Guess {
            letter,
            was_correct,
            auto_revealed: false,
        });

        debug!(
            %letter,
            was_correct,
            errors = self.error_count(),
            limit = self.error_limit,
            "guess recorded"
        );

        if was_correct {
            Notice::Found(letter)
        } else {
            Notice::NotFound(letter)
        }
    }
}
