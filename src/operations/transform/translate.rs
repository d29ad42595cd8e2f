use crate::error::Result;
use crate::math::{Matrix4, Vector3};
use crate::topology::Shape;

use super::GeneralTransform;

/// Translates a shape by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, returning the moved shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the translated shape fails validation, e.g. a
    /// coordinate overflows to infinity.
    pub fn execute(&self, shape: &Shape) -> Result<Shape> {
        GeneralTransform::new(Matrix4::new_translation(&self.displacement)).execute(shape)
    }
}
