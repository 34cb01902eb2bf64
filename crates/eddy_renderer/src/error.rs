use eddy_core::CoreError;
use eddy_math::MathError;
use thiserror::Error;

/// Errors that abort a render pass or its output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Degenerate camera: {0}")]
    DegenerateCamera(String),

    #[error("Scene error: {0}")]
    Core(#[from] CoreError),

    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
