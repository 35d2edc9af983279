use thiserror::Error;

/// Input validation errors surfaced immediately to the caller.
///
/// Geometry edge cases during a computation (parallel ray/segment, grazing
/// hits) are resolved locally inside the algorithms and never reported here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A polygon needs at least 3 vertices to enclose an area
    #[error("obstacle polygon needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),

    /// Zero rays would produce an empty fan with no angular coverage
    #[error("ray count must be positive")]
    InvalidRayCount,

    /// Coverage mask axes must both be non-zero
    #[error("raster resolution must be non-zero on both axes, got {0}x{1}")]
    InvalidResolution(usize, usize),

    /// Start or goal coordinate outside the grid
    #[error("coordinate ({x},{y}) is outside the {cols}x{rows} grid")]
    OutOfBounds { x: i32, y: i32, cols: i32, rows: i32 },
}
