use thiserror::Error;

/// Top-level error type for the geoprim library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeoprimError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

/// Errors raised while constructing or mutating shapes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("negative radius: {0}")]
    NegativeRadius(String),

    #[error("bezier curve needs {expected} control points, got {actual}")]
    ControlPointCount { expected: usize, actual: usize },
}

/// Errors raised by vector algebra.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("unable to calculate angle for zero-length vector")]
    ZeroVector,

    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience type alias for results using [`GeoprimError`].
pub type Result<T> = std::result::Result<T, GeoprimError>;
