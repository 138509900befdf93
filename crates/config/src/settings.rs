use gambit_common::Viewport;
use gambit_difficulty::DifficultyLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading, saving or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// User preferences for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub fullscreen: bool,
    pub vsync: bool,
    pub window_width: u32,
    pub window_height: u32,
    /// Linear gain in `[0, 1]`.
    pub master_volume: f32,
    /// Name of the theme to activate after the catalogue loads.
    pub theme: String,
    pub difficulty: DifficultyLevel,
    /// Root scanned for themes. `None` uses the built-in catalogue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes_dir: Option<PathBuf>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            fullscreen: false,
            vsync: true,
            window_width: 1024,
            window_height: 768,
            master_volume: 1.0,
            theme: "Classic".into(),
            difficulty: DifficultyLevel::Intermediate,
            themes_dir: None,
        }
    }
}

impl GameSettings {
    /// Load and validate settings from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let settings: Self = serde_yaml::from_str(&data)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Like [`GameSettings::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let settings = Self::load(path)?;
        tracing::debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    /// Write settings as YAML, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid {
                field: "window size",
                reason: format!(
                    "{}x{} has a zero dimension",
                    self.window_width, self.window_height
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(ConfigError::Invalid {
                field: "master_volume",
                reason: format!("{} is outside [0, 1]", self.master_volume),
            });
        }
        if self.theme.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "theme",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = GameSettings::default();
        assert!(!s.fullscreen);
        assert!(s.vsync);
        assert_eq!(s.viewport(), Viewport::new(1024, 768));
        assert_eq!(s.master_volume, 1.0);
        assert_eq!(s.theme, "Classic");
        assert_eq!(s.difficulty, DifficultyLevel::Intermediate);
        assert!(s.themes_dir.is_none());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.yaml");
        std::fs::write(&path, "difficulty: expert\ntheme: Modern\n").unwrap();
        let s = GameSettings::load(&path).unwrap();
        assert_eq!(s.difficulty, DifficultyLevel::Expert);
        assert_eq!(s.theme, "Modern");
        assert_eq!(s.window_width, 1024);
        assert!(s.vsync);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let s = GameSettings::load_or_default(tmp.path().join("absent.yaml")).unwrap();
        assert_eq!(s, GameSettings::default());
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("settings.yaml");
        let settings = GameSettings {
            fullscreen: true,
            master_volume: 0.25,
            difficulty: DifficultyLevel::Grandmaster,
            themes_dir: Some(PathBuf::from("assets/themes")),
            ..GameSettings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(GameSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.yaml");
        std::fs::write(&path, "difficulty: impossible\n").unwrap();
        assert!(matches!(GameSettings::load(&path), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn zero_window_is_invalid() {
        let s = GameSettings {
            window_height: 0,
            ..GameSettings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(ConfigError::Invalid { field: "window size", .. })
        ));
    }

    #[test]
    fn volume_out_of_range_is_invalid() {
        let s = GameSettings {
            master_volume: 1.5,
            ..GameSettings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(ConfigError::Invalid { field: "master_volume", .. })
        ));
    }

    #[test]
    fn invalid_file_fails_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.yaml");
        std::fs::write(&path, "master_volume: -1.0\n").unwrap();
        assert!(matches!(
            GameSettings::load(&path),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
