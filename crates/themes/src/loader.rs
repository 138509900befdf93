use crate::error::ThemeError;
use crate::theme::Theme;
use gambit_assets::{AssetId, AssetKind, AssetStore};
use std::collections::BTreeMap;

/// Acquires and releases the resources a theme needs (piece models,
/// board textures, environment maps, animation data).
pub trait AssetLoader {
    /// Make `theme`'s resources resident. A failure must leave previously
    /// loaded resources untouched.
    fn load(&mut self, theme: &Theme) -> Result<(), ThemeError>;

    /// Release everything acquired by [`AssetLoader::load`] for `theme`.
    fn unload(&mut self, theme: &Theme);
}

/// Accepts every theme and holds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLoader;

impl AssetLoader for NoopLoader {
    fn load(&mut self, theme: &Theme) -> Result<(), ThemeError> {
        tracing::debug!(theme = %theme.name, "loading theme resources");
        Ok(())
    }

    fn unload(&mut self, theme: &Theme) {
        tracing::debug!(theme = %theme.name, "unloading theme resources");
    }
}

/// Registers a theme's asset locators as handles in an [`AssetStore`].
///
/// Handles are tracked per theme name so the same theme can be loaded
/// twice and each load must be matched by an unload.
#[derive(Debug, Default)]
pub struct StoreLoader {
    store: AssetStore,
    held: BTreeMap<String, Vec<Vec<AssetId>>>,
}

impl StoreLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    /// Handles acquired by the most recent load of `theme`.
    pub fn handles(&self, theme: &str) -> Option<&[AssetId]> {
        self.held
            .get(theme)
            .and_then(|loads| loads.last())
            .map(Vec::as_slice)
    }

    fn locators(theme: &Theme) -> Vec<(AssetKind, &str)> {
        let mut locators = vec![
            (AssetKind::PieceSet, theme.pieces_path.as_str()),
            (AssetKind::BoardTexture, theme.board_texture.as_str()),
            (AssetKind::EnvironmentMap, theme.environment_map.as_str()),
        ];
        if theme.has_animations {
            locators.push((AssetKind::Animation, theme.pieces_path.as_str()));
        }
        locators
    }

    fn release_all(&mut self, ids: &[AssetId]) {
        for id in ids {
            if let Err(e) = self.store.release(*id) {
                tracing::warn!("failed to release asset: {e}");
            }
        }
    }
}

impl AssetLoader for StoreLoader {
    fn load(&mut self, theme: &Theme) -> Result<(), ThemeError> {
        let mut acquired = Vec::new();
        for (kind, locator) in Self::locators(theme) {
            match self.store.acquire(kind, locator) {
                Ok(id) => acquired.push(id),
                Err(e) => {
                    self.release_all(&acquired);
                    return Err(ThemeError::ResourceLoad {
                        theme: theme.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        tracing::debug!(
            theme = %theme.name,
            handles = acquired.len(),
            resident = self.store.len(),
            "theme resources loaded"
        );
        self.held.entry(theme.name.clone()).or_default().push(acquired);
        Ok(())
    }

    fn unload(&mut self, theme: &Theme) {
        let Some(loads) = self.held.get_mut(&theme.name) else {
            return;
        };
        let ids = loads.pop().unwrap_or_default();
        if loads.is_empty() {
            self.held.remove(&theme.name);
        }
        self.release_all(&ids);
        tracing::debug!(
            theme = %theme.name,
            resident = self.store.len(),
            "theme resources unloaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::builtin_themes;

    #[test]
    fn noop_loader_accepts_everything() {
        let mut loader = NoopLoader;
        for theme in builtin_themes() {
            assert!(loader.load(&theme).is_ok());
            loader.unload(&theme);
        }
    }

    #[test]
    fn store_loader_registers_theme_assets() {
        let themes = builtin_themes();
        let mut loader = StoreLoader::new();
        loader.load(&themes[0]).unwrap();
        assert_eq!(loader.store().len(), 3);
        assert_eq!(loader.handles("Classic").map(<[_]>::len), Some(3));
        assert!(
            loader
                .store()
                .lookup(AssetKind::BoardTexture, "themes/classic/board.jpg")
                .is_some()
        );
    }

    #[test]
    fn animated_theme_adds_animation_handle() {
        let themes = builtin_themes();
        let mut loader = StoreLoader::new();
        loader.load(&themes[1]).unwrap();
        assert_eq!(loader.handles("Modern").map(<[_]>::len), Some(4));
    }

    #[test]
    fn unload_releases_everything() {
        let themes = builtin_themes();
        let mut loader = StoreLoader::new();
        loader.load(&themes[2]).unwrap();
        loader.unload(&themes[2]);
        assert!(loader.store().is_empty());
        assert!(loader.handles("Fantasy").is_none());
    }

    #[test]
    fn double_load_needs_double_unload() {
        let themes = builtin_themes();
        let mut loader = StoreLoader::new();
        loader.load(&themes[0]).unwrap();
        loader.load(&themes[0]).unwrap();
        loader.unload(&themes[0]);
        assert_eq!(loader.store().len(), 3);
        loader.unload(&themes[0]);
        assert!(loader.store().is_empty());
    }

    #[test]
    fn unload_of_unknown_theme_is_ignored() {
        let themes = builtin_themes();
        let mut loader = StoreLoader::new();
        loader.load(&themes[0]).unwrap();
        loader.unload(&themes[3]);
        assert_eq!(loader.store().len(), 3);
    }

    #[test]
    fn failed_load_rolls_back() {
        let mut loader = StoreLoader::new();
        let theme = Theme {
            name: "Hollow".into(),
            description: String::new(),
            pieces_path: "themes/hollow/pieces/".into(),
            board_texture: "themes/hollow/board.jpg".into(),
            environment_map: String::new(),
            has_animations: false,
        };
        match loader.load(&theme) {
            Err(ThemeError::ResourceLoad { theme, .. }) => assert_eq!(theme, "Hollow"),
            other => panic!("expected resource error, got {other:?}"),
        }
        assert!(loader.store().is_empty());
        assert!(loader.handles("Hollow").is_none());
    }
}
