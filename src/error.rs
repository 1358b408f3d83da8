use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Canvas element or its 2D context could not be obtained.
    #[error("drawing surface unavailable: {0}")]
    MissingSurface(String),
    /// Viewport has a zero or non-finite dimension (e.g. during teardown).
    #[error("degenerate viewport {width}x{height}")]
    DegenerateViewport { width: f32, height: f32 },
    #[error("invalid scene config: {0}")]
    InvalidConfig(&'static str),
}
