//! Shared types used across the gambit crates.

pub mod types;

pub use types::{Rgba, Viewport};

pub fn crate_info() -> &'static str {
    "gambit-common v0.1.0"
}
