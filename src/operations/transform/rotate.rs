use crate::error::{OperationError, Result};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};
use crate::topology::Shape;

use super::GeneralTransform;

/// Rotates a shape around an axis.
pub struct Rotate {
    axis_origin: Point3,
    axis_direction: Vector3,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(axis_origin: Point3, axis_direction: Vector3, angle: f64) -> Self {
        Self {
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Executes the rotation, returning the rotated shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn execute(&self, shape: &Shape) -> Result<Shape> {
        let len = self.axis_direction.norm();
        if len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("rotation axis must be non-zero".into()).into(),
            );
        }
        let axis = nalgebra::Unit::new_unchecked(self.axis_direction / len);

        // Translate to origin, rotate, translate back
        let t_neg = Matrix4::new_translation(&(-self.axis_origin.coords));
        let rot = nalgebra::Rotation3::from_axis_angle(&axis, self.angle).to_homogeneous();
        let t_pos = Matrix4::new_translation(&self.axis_origin.coords);
        let matrix = t_pos * rot * t_neg;

        GeneralTransform::new(matrix).execute(shape)
    }
}
