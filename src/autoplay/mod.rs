//! Automatic players
//!
//! Letter-guessing strategies used by the simulation command.

mod engine;
pub mod strategy;

pub use engine::{AutoRound, play_round};
pub use strategy::{
    AlphabeticalGuesser, CandidateGuesser, FrequencyGuesser, Guesser, GuesserType, RandomGuesser,
};
