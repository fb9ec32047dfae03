use thiserror::Error;

/// Errors surfaced by configuration, export and start-up.
///
/// Drawing, undo, redo and clear never fail; they are total over the
/// sketchpad state and do not appear here.
#[derive(Debug, Error)]
pub enum SketchpadError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start download: {0}")]
    Download(String),

    #[error("Surface has no pixels ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },
}

pub type SketchpadResult<T> = Result<T, SketchpadError>;
