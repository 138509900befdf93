use anyhow::Result;
use egui::Context as EguiContext;
use gambit_common::Rgba;
use gambit_config::GameSettings;
use gambit_difficulty::{DifficultyLevel, LevelRegistry};
use gambit_render::{CameraView, SceneView};
use gambit_themes::{BuiltinThemes, DirectoryThemes, StoreLoader, ThemeRegistry, ThemeSource};
use glam::Mat4;
use winit::keyboard::KeyCode;

/// Theme registry as the desktop client uses it.
pub type Themes = ThemeRegistry<Box<dyn ThemeSource>, StoreLoader>;

/// Top-level phase of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
    Settings,
}

impl GameState {
    /// Playing and Paused swap; every other state is unaffected.
    pub fn toggle_pause(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
            other => other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::GameOver => "Game over",
            Self::Settings => "Settings",
        }
    }
}

/// Window-level effects of a key press, carried out by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Quit,
    ToggleFullscreen,
}

/// Registries, settings and UI state. Knows nothing about the GPU.
pub struct AppState {
    pub settings: GameSettings,
    pub levels: LevelRegistry,
    pub themes: Themes,
    pub game_state: GameState,
    pub camera: CameraView,
    pub show_panel: bool,
    /// Board spin in radians; advances only while playing.
    spin: f32,
}

impl AppState {
    pub fn new(settings: GameSettings) -> Result<Self> {
        let source: Box<dyn ThemeSource> = match &settings.themes_dir {
            Some(dir) => Box::new(DirectoryThemes::new(dir)),
            None => Box::new(BuiltinThemes),
        };
        tracing::info!(origin = %source.origin(), "loading themes");

        let mut themes = ThemeRegistry::with_parts(source, StoreLoader::new());
        themes.load_themes()?;
        if let Err(e) = themes.set_active_theme(&settings.theme) {
            tracing::warn!("keeping default theme: {e}");
        }

        let mut levels = LevelRegistry::new();
        levels.set_active_level(settings.difficulty);

        Ok(Self {
            settings,
            levels,
            themes,
            game_state: GameState::default(),
            camera: CameraView::default(),
            show_panel: true,
            spin: 0.0,
        })
    }

    pub fn update(&mut self, dt: f32) {
        if self.game_state == GameState::Playing {
            self.spin = (self.spin + dt * 0.5) % std::f32::consts::TAU;
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.spin)
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<WindowCommand> {
        match key {
            KeyCode::Escape => return Some(WindowCommand::Quit),
            KeyCode::F11 => return Some(WindowCommand::ToggleFullscreen),
            KeyCode::KeyP => {
                self.game_state = self.game_state.toggle_pause();
                tracing::info!(state = self.game_state.label(), "game state changed");
            }
            KeyCode::F1 => self.show_panel = !self.show_panel,
            _ => {}
        }
        None
    }

    pub fn scene(&self) -> SceneView {
        SceneView {
            theme: self.themes.active_theme().map(|t| t.name.clone()),
            difficulty: Some(self.levels.active_settings().name.to_string()),
            clear_color: Rgba::BACKDROP,
            camera: self.camera,
        }
    }

    /// Copy the current selections back into the settings.
    pub fn sync_settings(&mut self) {
        self.settings.difficulty = self.levels.active_level();
        if let Some(theme) = self.themes.active_theme() {
            self.settings.theme = theme.name.clone();
        }
    }

    pub fn draw_ui(&mut self, ctx: &EguiContext) {
        if !self.show_panel {
            return;
        }

        egui::SidePanel::left("game_panel")
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Gambit");
                ui.label(format!("State: {}", self.game_state.label()));
                ui.horizontal(|ui| match self.game_state {
                    GameState::Menu | GameState::GameOver => {
                        if ui.button("New game").clicked() {
                            self.game_state = GameState::Playing;
                        }
                    }
                    GameState::Playing | GameState::Paused => {
                        let label = if self.game_state == GameState::Paused {
                            "Resume (P)"
                        } else {
                            "Pause (P)"
                        };
                        if ui.button(label).clicked() {
                            self.game_state = self.game_state.toggle_pause();
                        }
                        if ui.button("Resign").clicked() {
                            self.game_state = GameState::GameOver;
                        }
                    }
                    GameState::Settings => {
                        if ui.button("Back").clicked() {
                            self.game_state = GameState::Menu;
                        }
                    }
                });
                if self.game_state == GameState::Menu && ui.button("Settings").clicked() {
                    self.game_state = GameState::Settings;
                }
                ui.separator();

                ui.heading("Difficulty");
                let mut selected = self.levels.active_level();
                egui::ComboBox::from_id_salt("difficulty")
                    .selected_text(selected.name())
                    .show_ui(ui, |ui| {
                        for level in DifficultyLevel::ALL {
                            ui.selectable_value(&mut selected, level, level.name());
                        }
                    });
                if selected != self.levels.active_level() {
                    self.levels.set_active_level(selected);
                }
                let active = *self.levels.active_settings();
                ui.label(active.description);
                ui.label(format!("Search depth: {}", active.search_depth));
                ui.label(format!("Time limit: {} ms", active.time_limit_ms));
                ui.label(format!(
                    "Hints: {}  Analysis: {}",
                    yes_no(active.hints_enabled),
                    yes_no(active.analysis_mode)
                ));
                ui.separator();

                ui.heading("Theme");
                let current = self.themes.active_theme().map(|t| t.name.clone());
                let mut requested = None;
                for theme in self.themes.available_themes() {
                    let is_active = current.as_deref() == Some(theme.name.as_str());
                    if ui
                        .selectable_label(is_active, &theme.name)
                        .on_hover_text(&theme.description)
                        .clicked()
                        && !is_active
                    {
                        requested = Some(theme.name);
                    }
                }
                if let Some(name) = requested {
                    if let Err(e) = self.themes.set_active_theme(&name) {
                        tracing::error!("theme switch failed: {e}");
                    }
                }
                if let Some(theme) = self.themes.active_theme() {
                    ui.label(&theme.description);
                    if theme.has_animations {
                        ui.small("Animated pieces");
                    }
                }
                ui.label(format!(
                    "Resident assets: {}",
                    self.themes.loader().store().len()
                ));

                ui.separator();
                ui.small("F1: Panel | P: Pause | F11: Fullscreen | Esc: Quit");
            });
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(GameSettings::default()).unwrap()
    }

    #[test]
    fn pause_toggles_only_in_play() {
        assert_eq!(GameState::Playing.toggle_pause(), GameState::Paused);
        assert_eq!(GameState::Paused.toggle_pause(), GameState::Playing);
        assert_eq!(GameState::Menu.toggle_pause(), GameState::Menu);
        assert_eq!(GameState::GameOver.toggle_pause(), GameState::GameOver);
    }

    #[test]
    fn starts_from_settings() {
        let settings = GameSettings {
            theme: "Fantasy".into(),
            difficulty: DifficultyLevel::Master,
            ..GameSettings::default()
        };
        let app = AppState::new(settings).unwrap();
        assert_eq!(app.themes.active_theme().unwrap().name, "Fantasy");
        assert_eq!(app.levels.active_level(), DifficultyLevel::Master);
        assert_eq!(app.game_state, GameState::Menu);
    }

    #[test]
    fn unknown_theme_keeps_first() {
        let settings = GameSettings {
            theme: "Vaporwave".into(),
            ..GameSettings::default()
        };
        let app = AppState::new(settings).unwrap();
        assert_eq!(app.themes.active_theme().unwrap().name, "Classic");
    }

    #[test]
    fn missing_themes_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = GameSettings {
            themes_dir: Some(tmp.path().join("absent")),
            ..GameSettings::default()
        };
        assert!(AppState::new(settings).is_err());
    }

    #[test]
    fn keys_map_to_commands() {
        let mut app = state();
        assert_eq!(app.handle_key(KeyCode::Escape), Some(WindowCommand::Quit));
        assert_eq!(
            app.handle_key(KeyCode::F11),
            Some(WindowCommand::ToggleFullscreen)
        );
        app.game_state = GameState::Playing;
        assert_eq!(app.handle_key(KeyCode::KeyP), None);
        assert_eq!(app.game_state, GameState::Paused);
        app.handle_key(KeyCode::F1);
        assert!(!app.show_panel);
    }

    #[test]
    fn spin_freezes_when_paused() {
        let mut app = state();
        app.game_state = GameState::Playing;
        app.update(1.0);
        let playing = app.model_matrix();
        assert_ne!(playing, Mat4::IDENTITY);
        app.game_state = GameState::Paused;
        app.update(1.0);
        assert_eq!(app.model_matrix(), playing);
    }

    #[test]
    fn scene_reflects_selection() {
        let mut app = state();
        app.levels.set_active_level(DifficultyLevel::Expert);
        let scene = app.scene();
        assert_eq!(scene.theme.as_deref(), Some("Classic"));
        assert_eq!(scene.difficulty.as_deref(), Some("Expert"));
        assert_eq!(scene.clear_color, Rgba::BACKDROP);
    }

    #[test]
    fn sync_writes_selection_back() {
        let mut app = state();
        app.themes.set_active_theme("Camo").unwrap();
        app.levels.set_active_level(DifficultyLevel::Beginner);
        app.sync_settings();
        assert_eq!(app.settings.theme, "Camo");
        assert_eq!(app.settings.difficulty, DifficultyLevel::Beginner);
    }
}
