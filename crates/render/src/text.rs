use crate::renderer::{RenderError, Renderer, SceneView};
use gambit_common::Viewport;
use std::fmt::Write;

const FILES: &str = "  a b c d e f g h";

/// Starting position, rank 8 first. Uppercase is white.
const START_RANKS: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

/// The initial position as an ASCII diagram with file and rank labels.
pub fn board_preview() -> String {
    let mut out = String::new();
    out.push_str(FILES);
    out.push('\n');
    for (i, rank) in START_RANKS.iter().enumerate() {
        let number = 8 - i;
        let squares: Vec<String> = rank.chars().map(String::from).collect();
        let _ = writeln!(out, "{number} {} {number}", squares.join(" "));
    }
    out.push_str(FILES);
    out.push('\n');
    out
}

/// Renders a scene as a human-readable frame description.
///
/// Useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    viewport: Option<Viewport>,
    show_board: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the board diagram to every frame.
    pub fn with_board(mut self) -> Self {
        self.show_board = true;
        self
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}

impl Renderer for DebugTextRenderer {
    type Output = Result<String, RenderError>;

    fn initialize(&mut self, viewport: Viewport) -> Result<(), RenderError> {
        if viewport.is_empty() {
            return Err(RenderError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "text renderer initialized"
        );
        self.viewport = Some(viewport);
        Ok(())
    }

    fn render(&self, scene: &SceneView) -> Result<String, RenderError> {
        let viewport = self.viewport.ok_or(RenderError::NotInitialized)?;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Frame {}x{} ===",
            viewport.width, viewport.height
        );
        let _ = writeln!(
            out,
            "Theme: {}",
            scene.theme.as_deref().unwrap_or("(none)")
        );
        let _ = writeln!(
            out,
            "Difficulty: {}",
            scene.difficulty.as_deref().unwrap_or("(none)")
        );
        let c = scene.clear_color;
        let _ = writeln!(
            out,
            "Clear: ({:.2}, {:.2}, {:.2}, {:.2})",
            c.r(),
            c.g(),
            c.b(),
            c.a()
        );
        let eye = scene.camera.eye;
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) fov={:.0}",
            eye.x, eye.y, eye.z, scene.camera.fov_degrees
        );
        if self.show_board {
            out.push_str(&board_preview());
        }
        Ok(out)
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport.clamped());
    }
}
