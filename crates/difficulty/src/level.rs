use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// AI strength tag, ordered from weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Novice,
    #[default]
    Intermediate,
    Advanced,
    Expert,
    Master,
    Grandmaster,
}

impl DifficultyLevel {
    /// Every level in ascending strength.
    pub const ALL: [Self; 7] = [
        Self::Beginner,
        Self::Novice,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
        Self::Master,
        Self::Grandmaster,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::Grandmaster => "Grandmaster",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no difficulty level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for DifficultyLevel {
    type Err = ParseLevelError;

    /// Case-insensitive match on the level name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Engine and UI settings bound to one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultySettings {
    pub level: DifficultyLevel,
    pub name: &'static str,
    pub description: &'static str,
    /// Maximum search depth in plies.
    pub search_depth: u32,
    /// Move time budget in milliseconds.
    pub time_limit_ms: u32,
    pub hints_enabled: bool,
    pub analysis_mode: bool,
    pub thinking_time_multiplier: f32,
}

const BUILTIN_LEVELS: [DifficultySettings; 7] = [
    DifficultySettings {
        level: DifficultyLevel::Beginner,
        name: "Beginner",
        description: "Perfect for learning chess basics. Includes hints and move suggestions.",
        search_depth: 2,
        time_limit_ms: 1000,
        hints_enabled: true,
        analysis_mode: true,
        thinking_time_multiplier: 0.5,
    },
    DifficultySettings {
        level: DifficultyLevel::Novice,
        name: "Novice",
        description: "Easy difficulty with optional hints for new players.",
        search_depth: 3,
        time_limit_ms: 2000,
        hints_enabled: true,
        analysis_mode: true,
        thinking_time_multiplier: 0.7,
    },
    DifficultySettings {
        level: DifficultyLevel::Intermediate,
        name: "Intermediate",
        description: "Balanced difficulty for casual players.",
        search_depth: 4,
        time_limit_ms: 3000,
        hints_enabled: false,
        analysis_mode: true,
        thinking_time_multiplier: 1.0,
    },
    DifficultySettings {
        level: DifficultyLevel::Advanced,
        name: "Advanced",
        description: "Challenging difficulty for experienced players.",
        search_depth: 5,
        time_limit_ms: 5000,
        hints_enabled: false,
        analysis_mode: true,
        thinking_time_multiplier: 1.2,
    },
    DifficultySettings {
        level: DifficultyLevel::Expert,
        name: "Expert",
        description: "Very challenging for strong players.",
        search_depth: 6,
        time_limit_ms: 8000,
        hints_enabled: false,
        analysis_mode: false,
        thinking_time_multiplier: 1.5,
    },
    DifficultySettings {
        level: DifficultyLevel::Master,
        name: "Master",
        description: "Tournament-level strength for serious players.",
        search_depth: 7,
        time_limit_ms: 12000,
        hints_enabled: false,
        analysis_mode: false,
        thinking_time_multiplier: 2.0,
    },
    DifficultySettings {
        level: DifficultyLevel::Grandmaster,
        name: "Grandmaster",
        description: "Maximum difficulty - prepare for a real challenge!",
        search_depth: 8,
        time_limit_ms: 20000,
        hints_enabled: false,
        analysis_mode: false,
        thinking_time_multiplier: 3.0,
    },
];

/// The compiled-in catalogue, Beginner first.
pub fn builtin_levels() -> Vec<DifficultySettings> {
    BUILTIN_LEVELS.to_vec()
}

/// The Intermediate record, used when a lookup misses.
pub(crate) fn fallback_settings() -> &'static DifficultySettings {
    &BUILTIN_LEVELS[2]
}

/// Linear scan of `levels` for the record tagged `level`.
pub fn find_level(
    levels: &[DifficultySettings],
    level: DifficultyLevel,
) -> Option<&DifficultySettings> {
    levels.iter().find(|settings| settings.level == level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_strength() {
        assert!(DifficultyLevel::Beginner < DifficultyLevel::Novice);
        assert!(DifficultyLevel::Master < DifficultyLevel::Grandmaster);
        let mut sorted = DifficultyLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, DifficultyLevel::ALL);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "expert".parse::<DifficultyLevel>(),
            Ok(DifficultyLevel::Expert)
        );
        assert_eq!(
            "GrandMaster".parse::<DifficultyLevel>(),
            Ok(DifficultyLevel::Grandmaster)
        );
        assert_eq!(
            " novice ".parse::<DifficultyLevel>(),
            Ok(DifficultyLevel::Novice)
        );
        assert_eq!(
            "impossible".parse::<DifficultyLevel>(),
            Err(ParseLevelError("impossible".into()))
        );
    }

    #[test]
    fn display_matches_name() {
        for level in DifficultyLevel::ALL {
            assert_eq!(level.to_string(), level.name());
        }
    }

    #[test]
    fn catalogue_has_one_record_per_level_in_order() {
        let levels = builtin_levels();
        let tags: Vec<_> = levels.iter().map(|s| s.level).collect();
        assert_eq!(tags, DifficultyLevel::ALL.to_vec());
        for settings in &levels {
            assert_eq!(settings.name, settings.level.name());
        }
    }

    #[test]
    fn catalogue_matches_table() {
        let expected: [(DifficultyLevel, u32, u32, bool, bool, f32); 7] = [
            (DifficultyLevel::Beginner, 2, 1000, true, true, 0.5),
            (DifficultyLevel::Novice, 3, 2000, true, true, 0.7),
            (DifficultyLevel::Intermediate, 4, 3000, false, true, 1.0),
            (DifficultyLevel::Advanced, 5, 5000, false, true, 1.2),
            (DifficultyLevel::Expert, 6, 8000, false, false, 1.5),
            (DifficultyLevel::Master, 7, 12000, false, false, 2.0),
            (DifficultyLevel::Grandmaster, 8, 20000, false, false, 3.0),
        ];
        let levels = builtin_levels();
        for (level, depth, time, hints, analysis, mult) in expected {
            let s = find_level(&levels, level).unwrap();
            assert_eq!(s.search_depth, depth, "{level}");
            assert_eq!(s.time_limit_ms, time, "{level}");
            assert_eq!(s.hints_enabled, hints, "{level}");
            assert_eq!(s.analysis_mode, analysis, "{level}");
            assert_eq!(s.thinking_time_multiplier, mult, "{level}");
        }
    }

    #[test]
    fn strength_parameters_never_decrease() {
        let levels = builtin_levels();
        for pair in levels.windows(2) {
            assert!(pair[0].search_depth <= pair[1].search_depth);
            assert!(pair[0].time_limit_ms <= pair[1].time_limit_ms);
            assert!(pair[0].thinking_time_multiplier <= pair[1].thinking_time_multiplier);
        }
        assert!(levels.iter().all(|s| s.search_depth > 0
            && s.time_limit_ms > 0
            && s.thinking_time_multiplier > 0.0));
    }

    #[test]
    fn find_level_misses_on_empty_slice() {
        assert!(find_level(&[], DifficultyLevel::Expert).is_none());
    }

    #[test]
    fn fallback_is_intermediate() {
        assert_eq!(fallback_settings().level, DifficultyLevel::Intermediate);
    }
}
