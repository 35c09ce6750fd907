use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapGenError {
    #[error("grid must be at least 3x3 to hold a border and an interior, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("forced floor ({x}, {y}) lies outside the interior of a {width}x{height} grid")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
    #[error("door density must lie in [0, 1], got {0}")]
    InvalidDoorDensity(f64),
    #[error("max placement attempts must be positive")]
    InvalidPlacementAttempts,
    #[error("template '{name}' is malformed: {reason}")]
    InvalidTemplate { name: String, reason: String },
}
