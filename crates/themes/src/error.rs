use std::path::PathBuf;

/// Errors from theme catalogue and resource operations.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme not found: {0}")]
    NotFound(String),
    #[error("themes directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed theme config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate theme name: {0}")]
    DuplicateTheme(String),
    #[error("failed to load resources for theme {theme}: {reason}")]
    ResourceLoad { theme: String, reason: String },
}
