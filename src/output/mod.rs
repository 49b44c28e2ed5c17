//! Terminal output formatting
//!
//! Display utilities for the line-based mode and command results.

pub mod display;
pub mod formatters;

pub use display::{
    outcome_message, print_check_result, write_board, write_outcome, write_statistics,
};
