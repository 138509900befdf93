//! Visual themes: catalogue, active-theme selection, resource hooks.
//!
//! # Invariants
//! - Theme names are unique within a catalogue (case-sensitive).
//! - A failed selection or a failed reload never changes the active theme.
//! - Resources acquired for the active theme are released before it is
//!   replaced and when the registry is dropped.
//!
//! Catalogue population and resource acquisition are capabilities
//! ([`ThemeSource`], [`AssetLoader`]) so a filesystem-backed pipeline or a
//! test double can be swapped in without touching the registry.

mod error;
mod loader;
mod registry;
mod source;
mod theme;

pub use error::ThemeError;
pub use loader::{AssetLoader, NoopLoader, StoreLoader};
pub use registry::ThemeRegistry;
pub use source::{
    BuiltinThemes, DEFAULT_THEMES_DIR, DirectoryThemes, THEME_CONFIG_FILE, ThemeSource,
};
pub use theme::{Theme, builtin_themes, find_theme};

pub fn crate_info() -> &'static str {
    "gambit-themes v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("themes"));
    }
}
