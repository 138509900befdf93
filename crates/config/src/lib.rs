//! Persistent game settings.
//!
//! Settings live in a YAML file. Every field has a default, so a partial
//! file (or no file at all) is valid.
//!
//! # Invariants
//! - A loaded `GameSettings` has already passed `validate`.
//! - Unknown difficulty tags fail deserialization rather than falling back.

mod settings;

pub use settings::{ConfigError, GameSettings};

pub fn crate_info() -> &'static str {
    "gambit-config v0.1.0"
}
