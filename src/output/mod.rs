//! Terminal output formatting
//!
//! Display utilities for the line-based game and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_catalog, print_notice, print_round, print_round_end, print_simulation_result,
};
