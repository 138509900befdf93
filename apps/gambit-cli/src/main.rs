mod demo;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gambit_config::GameSettings;
use gambit_difficulty::{DifficultyLevel, LevelRegistry};
use gambit_themes::{
    AssetLoader, BuiltinThemes, DirectoryThemes, NoopLoader, StoreLoader, ThemeRegistry,
    ThemeSource,
};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gambit-cli", about = "Console demos for the gambit chess client")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Settings file (YAML); missing files fall back to defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scan this directory for themes instead of using the built-in set
    #[arg(long)]
    themes_dir: Option<PathBuf>,

    /// Defaults to `demo`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// List themes and difficulty levels, then switch to Expert
    Demo,
    /// Print difficulty and theme details followed by the starting board
    Preview {
        /// Difficulty to show; defaults to the configured one
        #[arg(short, long)]
        difficulty: Option<DifficultyLevel>,
        /// Theme to activate; defaults to the first in the catalogue
        #[arg(short, long)]
        theme: Option<String>,
    },
    /// Activate a theme and write the resulting asset handles as JSON
    Assets {
        /// Theme to activate; defaults to the first in the catalogue
        #[arg(short, long)]
        theme: Option<String>,
        /// Output file
        #[arg(short, long, default_value = "assets.json")]
        out: PathBuf,
    },
}

fn theme_source(settings: &GameSettings) -> Box<dyn ThemeSource> {
    match &settings.themes_dir {
        Some(dir) => Box::new(DirectoryThemes::new(dir)),
        None => Box::new(BuiltinThemes),
    }
}

fn themes<L: AssetLoader>(
    settings: &GameSettings,
    loader: L,
) -> ThemeRegistry<Box<dyn ThemeSource>, L> {
    let source = theme_source(settings);
    tracing::debug!(origin = %source.origin(), "theme source");
    ThemeRegistry::with_parts(source, loader)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let mut settings = match &cli.config {
        Some(path) => GameSettings::load_or_default(path)?,
        None => GameSettings::default(),
    };
    if let Some(dir) = cli.themes_dir {
        settings.themes_dir = Some(dir);
    }

    let mut stdout = std::io::stdout().lock();
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Info => {
            writeln!(stdout, "gambit-cli v{}", env!("CARGO_PKG_VERSION"))?;
            writeln!(stdout, "common: {}", gambit_common::crate_info())?;
            writeln!(stdout, "difficulty: {}", gambit_difficulty::crate_info())?;
            writeln!(stdout, "assets: {}", gambit_assets::crate_info())?;
            writeln!(stdout, "themes: {}", gambit_themes::crate_info())?;
            writeln!(stdout, "config: {}", gambit_config::crate_info())?;
            writeln!(stdout, "render: {}", gambit_render::crate_info())?;
            writeln!(stdout, "theme source: {}", theme_source(&settings).origin())?;
        }
        Commands::Demo => {
            let mut levels = LevelRegistry::new();
            let mut registry = themes(&settings, NoopLoader);
            demo::console(&mut stdout, &mut registry, &mut levels)?;
        }
        Commands::Preview { difficulty, theme } => {
            let mut levels = LevelRegistry::new();
            let mut registry = themes(&settings, NoopLoader);
            let level = difficulty.unwrap_or(settings.difficulty);
            demo::preview(
                &mut stdout,
                &mut registry,
                &mut levels,
                level,
                theme.as_deref(),
            )?;
        }
        Commands::Assets { theme, out } => {
            let mut registry = themes(&settings, StoreLoader::new());
            demo::assets(&mut stdout, &mut registry, theme.as_deref(), &out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_runs_demo() {
        let cli = Cli::try_parse_from(["gambit-cli"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or(Commands::Demo),
            Commands::Demo
        ));
    }

    #[test]
    fn preview_accepts_difficulty() {
        let cli = Cli::try_parse_from(["gambit-cli", "preview", "-d", "expert"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Preview {
                difficulty: Some(DifficultyLevel::Expert),
                theme: None,
            })
        ));
    }
}
