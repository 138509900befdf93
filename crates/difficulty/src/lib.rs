//! Difficulty levels: a fixed seven-entry catalogue plus the active level.
//!
//! # Invariants
//! - Exactly one record per [`DifficultyLevel`], ordered by ascending strength.
//! - Search depth, time limit and thinking-time multiplier never decrease
//!   along that order.
//! - Lookups never fail; a missing record falls back to Intermediate.

mod level;
mod registry;

pub use level::{
    DifficultyLevel, DifficultySettings, ParseLevelError, builtin_levels, find_level,
};
pub use registry::LevelRegistry;

pub fn crate_info() -> &'static str {
    "gambit-difficulty v0.1.0"
}
