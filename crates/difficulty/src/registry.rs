use crate::level::{
    DifficultyLevel, DifficultySettings, builtin_levels, fallback_settings, find_level,
};

/// Owns the difficulty catalogue and tracks the active level.
///
/// The catalogue is filled once by [`LevelRegistry::initialize`] and is
/// read-only afterwards; only the active level changes.
#[derive(Debug, Clone)]
pub struct LevelRegistry {
    levels: Vec<DifficultySettings>,
    active: DifficultyLevel,
}

impl LevelRegistry {
    /// Create a registry with the built-in catalogue and Intermediate active.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.initialize();
        registry
    }

    /// Create a registry with no catalogue. Every lookup hits the fallback
    /// until [`LevelRegistry::initialize`] is called.
    pub fn empty() -> Self {
        Self {
            levels: Vec::new(),
            active: DifficultyLevel::Intermediate,
        }
    }

    /// Clear the catalogue and repopulate it with the built-in levels.
    pub fn initialize(&mut self) {
        self.levels.clear();
        self.levels.extend(builtin_levels());
        tracing::info!(count = self.levels.len(), "initialized difficulty levels");
    }

    /// Make `level` active and return its settings.
    pub fn set_active_level(&mut self, level: DifficultyLevel) -> &DifficultySettings {
        self.active = level;
        let settings = self.settings_for_level(level);
        tracing::info!(
            difficulty = settings.name,
            description = settings.description,
            "difficulty set"
        );
        settings
    }

    pub fn active_level(&self) -> DifficultyLevel {
        self.active
    }

    pub fn active_settings(&self) -> &DifficultySettings {
        self.settings_for_level(self.active_level())
    }

    /// Settings for `level`.
    ///
    /// Never fails: if the catalogue has no record for `level` the
    /// Intermediate record is returned and the miss is logged.
    pub fn settings_for_level(&self, level: DifficultyLevel) -> &DifficultySettings {
        if let Some(settings) = find_level(&self.levels, level) {
            return settings;
        }
        tracing::error!(
            requested = %level,
            catalogue_len = self.levels.len(),
            "difficulty level missing from catalogue, using Intermediate"
        );
        find_level(&self.levels, DifficultyLevel::Intermediate).unwrap_or(fallback_settings())
    }

    /// A copy of the catalogue, Beginner first.
    pub fn all_levels(&self) -> Vec<DifficultySettings> {
        self.levels.clone()
    }

    pub fn are_hints_enabled(&self) -> bool {
        self.active_settings().hints_enabled
    }

    pub fn is_analysis_mode_enabled(&self) -> bool {
        self.active_settings().analysis_mode
    }

    pub fn search_depth(&self) -> u32 {
        self.active_settings().search_depth
    }

    pub fn time_limit_ms(&self) -> u32 {
        self.active_settings().time_limit_ms
    }

    pub fn thinking_time_multiplier(&self) -> f32 {
        self.active_settings().thinking_time_multiplier
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn starts_at_intermediate() {
        let registry = LevelRegistry::new();
        assert_eq!(registry.active_level(), DifficultyLevel::Intermediate);
        assert_eq!(registry.search_depth(), 4);
        assert_eq!(registry.time_limit_ms(), 3000);
    }

    #[test]
    fn settings_for_every_level_carry_their_tag() {
        let registry = LevelRegistry::new();
        for level in DifficultyLevel::ALL {
            assert_eq!(registry.settings_for_level(level).level, level);
        }
    }

    #[test]
    fn set_active_level_updates_active_settings() {
        let mut registry = LevelRegistry::new();
        for level in DifficultyLevel::ALL {
            let surfaced = *registry.set_active_level(level);
            assert_eq!(surfaced.level, level);
            assert_eq!(registry.active_level(), level);
            assert_eq!(registry.active_settings(), registry.settings_for_level(level));
        }
    }

    #[test]
    fn all_levels_is_complete_and_ordered() {
        let registry = LevelRegistry::new();
        let levels = registry.all_levels();
        assert_eq!(levels.len(), 7);
        let unique: HashSet<_> = levels.iter().map(|s| s.level).collect();
        assert_eq!(unique.len(), 7);
        assert_eq!(levels.first().map(|s| s.level), Some(DifficultyLevel::Beginner));
        assert_eq!(
            levels.last().map(|s| s.level),
            Some(DifficultyLevel::Grandmaster)
        );
    }

    #[test]
    fn all_levels_returns_a_copy() {
        let registry = LevelRegistry::new();
        let mut copy = registry.all_levels();
        copy.clear();
        assert_eq!(registry.all_levels().len(), 7);
    }

    #[test]
    fn initialize_twice_does_not_duplicate() {
        let mut registry = LevelRegistry::new();
        registry.initialize();
        assert_eq!(registry.all_levels().len(), 7);
    }

    #[test]
    fn empty_registry_falls_back_to_intermediate() {
        let registry = LevelRegistry::empty();
        for level in DifficultyLevel::ALL {
            let settings = registry.settings_for_level(level);
            assert_eq!(settings.level, DifficultyLevel::Intermediate);
            assert_eq!(settings.search_depth, 4);
        }
        assert!(registry.all_levels().is_empty());
    }

    #[test]
    fn empty_registry_active_level_still_tracks_selection() {
        let mut registry = LevelRegistry::empty();
        let surfaced = registry.set_active_level(DifficultyLevel::Master).level;
        assert_eq!(surfaced, DifficultyLevel::Intermediate);
        assert_eq!(registry.active_level(), DifficultyLevel::Master);
    }

    #[test]
    fn expert_scenario() {
        let mut registry = LevelRegistry::new();
        registry.set_active_level(DifficultyLevel::Expert);
        assert!(!registry.are_hints_enabled());
        assert!(!registry.is_analysis_mode_enabled());
        assert_eq!(registry.search_depth(), 6);
        assert_eq!(registry.time_limit_ms(), 8000);
        assert_eq!(registry.thinking_time_multiplier(), 1.5);
    }

    #[test]
    fn beginner_has_hints_and_analysis() {
        let mut registry = LevelRegistry::new();
        registry.set_active_level(DifficultyLevel::Beginner);
        assert!(registry.are_hints_enabled());
        assert!(registry.is_analysis_mode_enabled());
    }
}
