use thiserror::Error;

/// Top-level error type for polymetric.
#[derive(Debug, Error)]
pub enum PolymetricError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("point {label} has a non-finite coordinate")]
    NonFinite { label: String },
}

/// Errors related to the points and faces of a shape.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("duplicate point label: {0}")]
    LabelCollision(String),

    #[error("face {face} references unknown point {label}")]
    UnknownLabel { face: usize, label: String },

    #[error("face {face} has {count} vertices, at least 3 are required")]
    TooFewVertices { face: usize, count: usize },

    #[error("edge {from} -> {to} is not matched by an opposite traversal")]
    InconsistentWinding { from: String, to: String },

    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors related to measurement operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PolymetricError`].
pub type Result<T> = std::result::Result<T, PolymetricError>;
