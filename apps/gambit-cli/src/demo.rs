//! Console demos. Each writes to `out` so the text can be checked in tests.

use anyhow::{Context, Result};
use gambit_common::Viewport;
use gambit_difficulty::{DifficultyLevel, LevelRegistry};
use gambit_render::{DebugTextRenderer, Renderer, SceneView};
use gambit_themes::{AssetLoader, StoreLoader, ThemeRegistry, ThemeSource};
use std::io::Write;
use std::path::Path;

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// List themes and difficulties, activate the first theme, switch to Expert.
pub fn console<S: ThemeSource, L: AssetLoader>(
    out: &mut impl Write,
    themes: &mut ThemeRegistry<S, L>,
    levels: &mut LevelRegistry,
) -> Result<()> {
    writeln!(out, "=== Gambit 3D Chess ===")?;
    writeln!(out)?;
    writeln!(out, "Initializing theme system...")?;
    themes.load_themes()?;

    writeln!(out, "Available themes:")?;
    let available = themes.available_themes();
    for theme in &available {
        writeln!(out, "  - {}: {}", theme.name, theme.description)?;
    }
    if let Some(first) = available.first() {
        let active = themes.set_active_theme(&first.name)?;
        writeln!(out, "Active theme: {}", active.name)?;
    }
    writeln!(out)?;

    writeln!(out, "Initializing difficulty system...")?;
    writeln!(out, "Available difficulty levels:")?;
    for level in levels.all_levels() {
        writeln!(out, "  - {}: {}", level.name, level.description)?;
        writeln!(
            out,
            "    Search depth: {}, Time limit: {}ms",
            level.search_depth, level.time_limit_ms
        )?;
    }
    writeln!(out)?;

    let current = levels.set_active_level(DifficultyLevel::Expert);
    writeln!(out, "Current difficulty: {}", current.name)?;
    writeln!(out, "Hints enabled: {}", yes_no(levels.are_hints_enabled()))?;
    writeln!(out)?;
    writeln!(out, "Core systems initialized.")?;
    Ok(())
}

/// Show the active difficulty, pick a theme, print the starting position.
pub fn preview<S: ThemeSource, L: AssetLoader>(
    out: &mut impl Write,
    themes: &mut ThemeRegistry<S, L>,
    levels: &mut LevelRegistry,
    level: DifficultyLevel,
    theme: Option<&str>,
) -> Result<()> {
    writeln!(out, "[Difficulty]")?;
    let settings = *levels.set_active_level(level);
    writeln!(out, "- Level: {}", settings.name)?;
    writeln!(out, "- Description: {}", settings.description)?;
    writeln!(out, "- Search depth: {}", settings.search_depth)?;
    writeln!(out, "- Time limit: {}ms", settings.time_limit_ms)?;
    writeln!(out, "- Hints enabled: {}", yes_no(settings.hints_enabled))?;
    writeln!(out)?;

    writeln!(out, "[Themes]")?;
    themes.load_themes()?;
    for t in themes.available_themes() {
        writeln!(out, "- {}", t.name)?;
    }
    if let Some(name) = theme {
        themes.set_active_theme(name)?;
    }
    if let Some(active) = themes.active_theme() {
        writeln!(out, "Active theme: {}", active.name)?;
        writeln!(out, "Description: {}", active.description)?;
    }
    writeln!(out)?;

    let mut renderer = DebugTextRenderer::new().with_board();
    renderer.initialize(Viewport::default())?;
    let scene = SceneView {
        theme: themes.active_theme().map(|t| t.name.clone()),
        difficulty: Some(settings.name.to_string()),
        ..SceneView::default()
    };
    writeln!(out, "[Board Preview]")?;
    write!(out, "{}", renderer.render(&scene)?)?;
    Ok(())
}

/// Activate `theme` through an asset store and dump the store as JSON.
pub fn assets<S: ThemeSource>(
    out: &mut impl Write,
    themes: &mut ThemeRegistry<S, StoreLoader>,
    theme: Option<&str>,
    path: &Path,
) -> Result<()> {
    themes.load_themes()?;
    if let Some(name) = theme {
        themes.set_active_theme(name)?;
    }
    let active = themes
        .active_theme()
        .map(|t| t.name.clone())
        .context("no theme available")?;

    let store = themes.loader().store();
    writeln!(out, "Resident assets for {active}:")?;
    for (id, entry) in store.iter() {
        writeln!(
            out,
            "  {:016x} {:?} {} (refs={})",
            id.0, entry.kind, entry.locator, entry.refs
        )?;
    }
    store
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    writeln!(out, "Wrote {} assets to {}", store.len(), path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_assets::AssetStore;

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn console_lists_and_switches() {
        let mut themes = ThemeRegistry::new();
        let mut levels = LevelRegistry::new();
        let text = run(|out| console(out, &mut themes, &mut levels));

        assert!(text.contains("  - Classic: Traditional wooden chess set"));
        assert!(text.contains("  - Camo: Military camouflage theme"));
        assert!(text.contains("Active theme: Classic"));
        assert!(text.contains("    Search depth: 6, Time limit: 8000ms"));
        assert!(text.contains("Current difficulty: Expert"));
        assert!(text.contains("Hints enabled: No"));
        assert_eq!(levels.active_level(), DifficultyLevel::Expert);
    }

    #[test]
    fn preview_prints_board() {
        let mut themes = ThemeRegistry::new();
        let mut levels = LevelRegistry::new();
        let text = run(|out| {
            preview(
                out,
                &mut themes,
                &mut levels,
                DifficultyLevel::Intermediate,
                Some("Modern"),
            )
        });

        assert!(text.contains("- Level: Intermediate"));
        assert!(text.contains("- Time limit: 3000ms"));
        assert!(text.contains("- Hints enabled: No"));
        assert!(text.contains("Active theme: Modern"));
        assert!(text.contains("8 r n b q k b n r 8"));
        assert!(text.contains("1 R N B Q K B N R 1"));
    }

    #[test]
    fn preview_with_unknown_theme_fails() {
        let mut themes = ThemeRegistry::new();
        let mut levels = LevelRegistry::new();
        let mut buf = Vec::new();
        let result = preview(
            &mut buf,
            &mut themes,
            &mut levels,
            DifficultyLevel::Beginner,
            Some("Neon"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn assets_dump_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("assets.json");
        let mut themes =
            ThemeRegistry::with_parts(gambit_themes::BuiltinThemes, StoreLoader::new());
        let text = run(|out| assets(out, &mut themes, Some("Fantasy"), &path));

        assert!(text.contains("Resident assets for Fantasy:"));
        assert!(text.contains("themes/fantasy/board.jpg"));
        let store = AssetStore::load(&path).unwrap();
        assert_eq!(store.len(), 4);
    }
}
