use crate::error::{OperationError, Result};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};
use crate::topology::Shape;

use super::GeneralTransform;

/// Mirrors a shape across a plane defined by a point and normal.
///
/// Labels are kept, so the mirrored copy of point `A` is still `A`. Face
/// loops are reversed to stay outward-wound.
pub struct Mirror {
    plane_origin: Point3,
    plane_normal: Vector3,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(plane_origin: Point3, plane_normal: Vector3) -> Self {
        Self {
            plane_origin,
            plane_normal,
        }
    }

    /// Executes the mirror, returning the mirrored shape.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the plane normal is
    /// zero-length.
    pub fn execute(&self, shape: &Shape) -> Result<Shape> {
        let len = self.plane_normal.norm();
        if len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("mirror plane normal must be non-zero".into()).into(),
            );
        }
        let n = self.plane_normal / len;

        // Householder reflection I - 2 n n^T about the plane through the origin.
        let reflection =
            (nalgebra::Matrix3::<f64>::identity() - n * n.transpose() * 2.0).to_homogeneous();

        let matrix = Matrix4::new_translation(&self.plane_origin.coords)
            * reflection
            * Matrix4::new_translation(&(-self.plane_origin.coords));
        GeneralTransform::new(matrix).execute(shape)
    }
}
