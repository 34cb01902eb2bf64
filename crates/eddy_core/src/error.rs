use thiserror::Error;

/// Errors raised while building or loading a scene.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene description error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid primitive parameters: {0}")]
    InvalidPrimitiveParameters(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),
}

/// Result type for scene operations.
pub type CoreResult<T> = Result<T, CoreError>;
