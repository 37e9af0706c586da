//! Hangword
//!
//! A letter-by-letter word guessing game over a categorized catalog, with
//! accent-insensitive letter matching.
//!
//! # Quick Start
//!
//! ```rust
//! use hangword::core::{Category, FoodKind, Notice, RoundState, TargetWord};
//! use hangword::game::{render, submit_letter};
//!
//! let target = TargetWord::new("Açaí", Category::Food(FoodKind::Fruit)).unwrap();
//! let round = RoundState::new(target, 5);
//!
//! let (round, notice) = submit_letter(round, "a");
//! assert_eq!(notice, Notice::Found('a'));
//! assert_eq!(render(&round).display, "A?a?");
//! ```

// Core domain types
pub mod core;

// Word catalog and target selection
pub mod catalog;

// Game operations and sessions
pub mod game;

// Automatic players
pub mod autoplay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
