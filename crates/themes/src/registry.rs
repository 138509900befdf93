use crate::error::ThemeError;
use crate::loader::{AssetLoader, NoopLoader};
use crate::source::{BuiltinThemes, ThemeSource};
use crate::theme::{Theme, find_theme};
use std::collections::HashSet;

/// Owns the theme catalogue and at most one active theme.
///
/// Lifecycle:
/// ```text
/// new() --load_themes()--> catalogue ready, first theme active
///       --set_active_theme(name)--> named theme active (or unchanged on error)
///       --drop--> active theme's resources released
/// ```
pub struct ThemeRegistry<S: ThemeSource = BuiltinThemes, L: AssetLoader = NoopLoader> {
    source: S,
    loader: L,
    themes: Vec<Theme>,
    active: Option<Theme>,
    /// Whether the active theme's resources are currently held by `loader`.
    resident: bool,
}

impl ThemeRegistry {
    /// An empty registry backed by the built-in catalogue and a no-op loader.
    /// Call [`ThemeRegistry::load_themes`] to populate it.
    pub fn new() -> Self {
        Self::with_parts(BuiltinThemes, NoopLoader)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ThemeSource, L: AssetLoader> ThemeRegistry<S, L> {
    pub fn with_parts(source: S, loader: L) -> Self {
        Self {
            source,
            loader,
            themes: Vec::new(),
            active: None,
            resident: false,
        }
    }

    /// Replace the catalogue with a fresh scan of the source and activate
    /// its first theme.
    ///
    /// Fails if the scan fails, yields duplicate names, or the first theme's
    /// resources cannot be loaded. The previous catalogue and active theme
    /// are then left as they were.
    pub fn load_themes(&mut self) -> Result<usize, ThemeError> {
        tracing::info!(origin = %self.source.origin(), "loading themes");
        let themes = self.source.scan()?;

        {
            let mut seen = HashSet::new();
            if let Some(dup) = themes.iter().find(|t| !seen.insert(t.name.as_str())) {
                return Err(ThemeError::DuplicateTheme(dup.name.clone()));
            }
        }

        let first = themes.first().cloned();
        if let Some(theme) = &first {
            self.load_theme_resources(theme)?;
        }
        self.unload_theme_resources();
        self.resident = first.is_some();
        self.active = first;
        self.themes = themes;
        if let Some(theme) = &self.active {
            tracing::info!(theme = %theme.name, "active theme set");
        }

        tracing::info!(count = self.themes.len(), "loaded themes");
        Ok(self.themes.len())
    }

    /// Activate the theme called `name` (exact match).
    ///
    /// The new theme's resources are loaded before the previous theme's are
    /// released, so on any error the previous active theme stays in effect.
    pub fn set_active_theme(&mut self, name: &str) -> Result<&Theme, ThemeError> {
        let Some(theme) = find_theme(&self.themes, name).cloned() else {
            tracing::warn!(theme = name, "theme not found");
            return Err(ThemeError::NotFound(name.to_string()));
        };

        self.load_theme_resources(&theme)?;
        self.unload_theme_resources();
        self.resident = true;

        tracing::info!(theme = %theme.name, "active theme set");
        Ok(&*self.active.insert(theme))
    }

    pub fn active_theme(&self) -> Option<&Theme> {
        self.active.as_ref()
    }

    /// A copy of the catalogue in source order.
    pub fn available_themes(&self) -> Vec<Theme> {
        self.themes.clone()
    }

    /// Acquire `theme`'s resources through the registry's loader.
    pub fn load_theme_resources(&mut self, theme: &Theme) -> Result<(), ThemeError> {
        tracing::debug!(theme = %theme.name, "loading resources for theme");
        self.loader.load(theme).inspect_err(|e| {
            tracing::warn!(theme = %theme.name, "resource load failed: {e}");
        })
    }

    /// Release the active theme's resources. The theme stays selected.
    ///
    /// Called before switching themes and when the registry is dropped;
    /// a second call without a new activation in between does nothing.
    pub fn unload_theme_resources(&mut self) {
        if !self.resident {
            return;
        }
        if let Some(theme) = &self.active {
            tracing::debug!(theme = %theme.name, "unloading theme resources");
            self.loader.unload(theme);
        }
        self.resident = false;
    }

    /// Whether the active theme's resources are loaded.
    pub fn is_resident(&self) -> bool {
        self.resident
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

impl<S: ThemeSource, L: AssetLoader> Drop for ThemeRegistry<S, L> {
    fn drop(&mut self) {
        self.unload_theme_resources();
    }
}
