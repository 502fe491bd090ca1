use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("drawing surface is not available")]
    MissingSurface,
    #[error("draw call failed: {0}")]
    Draw(String),
    #[error("font could not be loaded: {0}")]
    Font(String),
}
