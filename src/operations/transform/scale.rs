use crate::error::Result;
use crate::math::{Matrix4, Point3, Vector3};
use crate::topology::Shape;

use super::GeneralTransform;

/// Scales a shape uniformly from a center point.
///
/// Areas grow with the square of the factor and volumes with its cube. A
/// negative factor also inverts the shape through the center.
pub struct Scale {
    center: Point3,
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(center: Point3, factor: f64) -> Self {
        Self { center, factor }
    }

    /// Executes the scaling, returning the scaled shape.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the factor is zero.
    pub fn execute(&self, shape: &Shape) -> Result<Shape> {
        // `new_scaling` would scale w as well.
        let scaling = Matrix4::new_nonuniform_scaling(&Vector3::repeat(self.factor));
        let matrix = Matrix4::new_translation(&self.center.coords)
            * scaling
            * Matrix4::new_translation(&(-self.center.coords));
        GeneralTransform::new(matrix).execute(shape)
    }
}
