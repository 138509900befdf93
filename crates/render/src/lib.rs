//! Rendering adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read registry state through a [`SceneView`]; they never
//!   mutate the registries.
//! - A renderer must be initialized with a non-empty viewport before it
//!   produces frames.
//!
//! The GPU backend lives in `gambit-render-wgpu`. [`DebugTextRenderer`]
//! implements the same trait for consoles and tests.

mod renderer;
mod text;

pub use renderer::{CameraView, RenderError, Renderer, SceneView};
pub use text::{DebugTextRenderer, board_preview};

pub fn crate_info() -> &'static str {
    "gambit-render v0.1.0"
}
