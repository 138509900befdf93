//! wgpu render backend for the chess client.
//!
//! Draws a single lit test triangle over the backdrop color. Geometry is
//! transformed by model, view and projection matrices the caller sets.
//!
//! # Invariants
//! - The depth buffer always matches the current surface size.
//! - Matrix setters take effect on the next `render` call.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
