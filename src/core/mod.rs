//! Core domain types for the word game
//!
//! Letter folding, categories, target words, reveal rendering and the round
//! state machine. Everything here is pure and deterministic; randomness lives
//! in the catalog selector.

mod category;
mod letter;
mod reveal;
mod round;
mod target;

pub use category::{CalendarKind, Category, FoodKind, PlaceKind};
pub use letter::{Letter, LetterError, SEPARATORS, fold, is_separator};
pub use reveal::{PLACEHOLDER, is_fully_revealed, reveal};
pub use round::{DEFAULT_ERROR_LIMIT, Guess, Notice, RoundState, RoundStatus};
pub use target::{TargetWord, WordError};
