use crate::error::{OperationError, Result};
use crate::math::{Matrix4, TOLERANCE};
use crate::topology::Shape;

/// Applies an arbitrary 4x4 affine transformation matrix to a shape.
///
/// Shapes are immutable, so the result is a new shape with the same labels
/// and faces at the transformed positions.
pub struct GeneralTransform {
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    /// Executes the transformation.
    ///
    /// A matrix with negative determinant mirrors the shape; the face loops
    /// are reversed so outward faces stay outward.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the matrix is singular.
    pub fn execute(&self, shape: &Shape) -> Result<Shape> {
        let det = self.matrix.fixed_view::<3, 3>(0, 0).determinant();
        if det.abs() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("transformation matrix is singular".into()).into(),
            );
        }

        let mut builder = Shape::builder();
        for (_, point) in shape.points() {
            builder = builder.point_at(
                point.label.as_str(),
                self.matrix.transform_point(&point.position),
            );
        }
        for face in shape.faces() {
            let mut labels = shape.face_labels(face);
            if det < 0.0 {
                labels.reverse();
            }
            builder = builder.face(&labels);
        }
        builder.build()
    }
}
