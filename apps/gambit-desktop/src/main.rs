mod app;
mod state;

use anyhow::Result;
use app::GpuApp;
use clap::Parser;
use gambit_config::GameSettings;
use gambit_difficulty::DifficultyLevel;
use state::AppState;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "gambit-desktop", about = "Gambit 3D chess client")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Settings file (YAML). Selections are written back on exit.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scan this directory for themes instead of using the built-in set
    #[arg(long)]
    themes_dir: Option<PathBuf>,

    /// Starting difficulty, e.g. "expert"
    #[arg(long)]
    difficulty: Option<DifficultyLevel>,

    /// Start in fullscreen
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("gambit-desktop starting");

    let mut settings = match &cli.config {
        Some(path) => GameSettings::load_or_default(path)?,
        None => GameSettings::default(),
    };
    if let Some(dir) = cli.themes_dir {
        settings.themes_dir = Some(dir);
    }
    if let Some(level) = cli.difficulty {
        settings.difficulty = level;
    }
    settings.fullscreen |= cli.fullscreen;
    settings.validate()?;

    let state = AppState::new(settings)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(state, cli.config);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
