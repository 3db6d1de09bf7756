#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the automaton encoder crates.
//!
//! - `State`: 1-indexed state identifier, as written in descriptions
//! - `Colors`: ANSI palette for CLI output
//! - `utils`: small text helpers for diagnostics and dumps

pub mod colors;
pub mod utils;

mod state;


pub use colors::Colors;
pub use state::State;
