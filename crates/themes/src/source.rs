use crate::error::ThemeError;
use crate::theme::{Theme, builtin_themes};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default root scanned by [`DirectoryThemes`].
pub const DEFAULT_THEMES_DIR: &str = "assets/themes";

/// Per-theme config file expected inside each theme directory.
pub const THEME_CONFIG_FILE: &str = "theme.json";

/// Produces a theme catalogue.
pub trait ThemeSource {
    /// Human-readable origin of the catalogue, used in logs.
    fn origin(&self) -> String;

    /// Build a fresh catalogue. Names in the result must be unique.
    fn scan(&self) -> Result<Vec<Theme>, ThemeError>;
}

impl<T: ThemeSource + ?Sized> ThemeSource for Box<T> {
    fn origin(&self) -> String {
        (**self).origin()
    }

    fn scan(&self) -> Result<Vec<Theme>, ThemeError> {
        (**self).scan()
    }
}

/// The four compiled-in themes. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinThemes;

impl ThemeSource for BuiltinThemes {
    fn origin(&self) -> String {
        "built-in defaults".into()
    }

    fn scan(&self) -> Result<Vec<Theme>, ThemeError> {
        Ok(builtin_themes())
    }
}

/// On-disk form of `theme.json`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    name: Option<String>,
    description: String,
    pieces_path: Option<String>,
    board_texture: Option<String>,
    environment_map: Option<String>,
    has_animations: bool,
}

/// Scans a themes root where every subdirectory holding a `theme.json`
/// is one theme.
///
/// ```text
/// assets/themes/
///   classic/
///     theme.json
///     pieces/
///     board.jpg
///     environment.hdr
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryThemes {
    root: PathBuf,
}

impl DirectoryThemes {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parse one theme directory's config file.
    ///
    /// The name defaults to the directory name; relative asset paths are
    /// resolved against the theme directory.
    pub fn parse_theme_config(theme_dir: &Path) -> Result<Theme, ThemeError> {
        let config_path = theme_dir.join(THEME_CONFIG_FILE);
        let data = std::fs::read_to_string(&config_path).map_err(|source| ThemeError::Io {
            path: config_path.clone(),
            source,
        })?;
        let file: ThemeFile =
            serde_json::from_str(&data).map_err(|source| ThemeError::Parse {
                path: config_path.clone(),
                source,
            })?;

        let name = match file.name {
            Some(name) => name,
            None => theme_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let resolve = |value: Option<String>, default: &str| -> String {
            let raw = value.unwrap_or_else(|| default.to_string());
            if Path::new(&raw).is_absolute() {
                raw
            } else {
                theme_dir.join(raw).to_string_lossy().into_owned()
            }
        };

        Ok(Theme {
            name,
            description: file.description,
            pieces_path: resolve(file.pieces_path, "pieces/"),
            board_texture: resolve(file.board_texture, "board.jpg"),
            environment_map: resolve(file.environment_map, "environment.hdr"),
            has_animations: file.has_animations,
        })
    }
}

impl Default for DirectoryThemes {
    fn default() -> Self {
        Self::new(DEFAULT_THEMES_DIR)
    }
}

impl ThemeSource for DirectoryThemes {
    fn origin(&self) -> String {
        self.root.display().to_string()
    }

    fn scan(&self) -> Result<Vec<Theme>, ThemeError> {
        if !self.root.is_dir() {
            return Err(ThemeError::MissingDirectory(self.root.clone()));
        }
        let io_err = |source| ThemeError::Io {
            path: self.root.clone(),
            source,
        };

        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if !path.is_dir() {
                continue;
            }
            if !path.join(THEME_CONFIG_FILE).is_file() {
                tracing::debug!(dir = %path.display(), "skipping directory without theme config");
                continue;
            }
            dirs.push(path);
        }
        dirs.sort();

        let mut seen = HashSet::new();
        let mut themes = Vec::with_capacity(dirs.len());
        for dir in dirs {
            let theme = Self::parse_theme_config(&dir)?;
            if !seen.insert(theme.name.clone()) {
                return Err(ThemeError::DuplicateTheme(theme.name));
            }
            tracing::debug!(theme = %theme.name, dir = %dir.display(), "found theme");
            themes.push(theme);
        }
        Ok(themes)
    }
}
