//! State identifiers.
//!
//! Descriptions number states from 1. Run-time tables store 0-based indices,
//! so conversion is explicit: `State::from_index` and `State::to_index`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A state as declared in a description (1-indexed).
///
/// Signed so that out-of-range declarations such as `-1` survive parsing and
/// can be reported by validation instead of failing deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(i64);

impl State {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether the state lies in `[1, state_count]`.
    pub fn is_within(self, state_count: usize) -> bool {
        self.0 >= 1 && (self.0 as u64) <= state_count as u64
    }

    /// 0-based storage index. Only meaningful for states that passed `is_within`.
    pub fn to_index(self) -> usize {
        debug_assert!(self.0 >= 1, "state {} has no storage index", self.0);
        (self.0 - 1) as usize
    }

    /// Inverse of `to_index`.
    pub fn from_index(index: usize) -> Self {
        Self(index as i64 + 1)
    }
}

impl From<i64> for State {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
