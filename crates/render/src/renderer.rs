use gambit_common::{Rgba, Viewport};
use glam::{Mat4, Vec3};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("renderer used before initialize")]
    NotInitialized,
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

/// Camera looking at the board.
#[derive(Debug, Clone, Copy)]
pub struct CameraView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraView {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            viewport.aspect(),
            self.near,
            self.far,
        )
    }
}

/// What a renderer needs to know about the current frame.
#[derive(Debug, Clone, Default)]
pub struct SceneView {
    /// Name of the active theme, if any.
    pub theme: Option<String>,
    /// Display name of the active difficulty.
    pub difficulty: Option<String>,
    pub clear_color: Rgba,
    pub camera: CameraView,
}

/// Renderer-agnostic interface. All renderers implement this trait.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Prepare for drawing into `viewport`. Rejects an empty viewport.
    fn initialize(&mut self, viewport: Viewport) -> Result<(), RenderError>;

    /// Render one frame of `scene`.
    fn render(&self, scene: &SceneView) -> Self::Output;

    /// Adapt to a new drawable size. Zero dimensions are clamped to one.
    fn resize(&mut self, viewport: Viewport);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_default_looks_at_origin() {
        let camera = CameraView::default();
        assert_eq!(camera.target, Vec3::ZERO);
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-5);
    }

    #[test]
    fn projection_tracks_aspect() {
        let camera = CameraView::default();
        let wide = camera.projection_matrix(Viewport::new(2000, 1000));
        let square = camera.projection_matrix(Viewport::new(1000, 1000));
        assert!((square.x_axis.x / wide.x_axis.x - 2.0).abs() < 1e-4);
    }

    #[test]
    fn scene_default_uses_backdrop() {
        let scene = SceneView::default();
        assert_eq!(scene.clear_color, Rgba::BACKDROP);
        assert!(scene.theme.is_none());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            RenderError::NotInitialized.to_string(),
            "renderer used before initialize"
        );
        let err = RenderError::InvalidViewport {
            width: 0,
            height: 600,
        };
        assert_eq!(err.to_string(), "invalid viewport 0x600");
    }
}
