use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::math::{polygon_area_3d, polygon_perimeter, quad_area, triangle_area, Point3};
use crate::topology::Shape;

use super::MeasureParams;

/// Area of one planar face given its boundary loop.
///
/// Triangles use Heron's formula, quads are split along their first
/// diagonal, longer loops use the shoelace formula in the face plane.
#[must_use]
pub fn face_area(points: &[Point3]) -> f64 {
    match points {
        [a, b, c] => triangle_area(a, b, c),
        [a, b, c, d] => quad_area(a, b, c, d),
        _ => polygon_area_3d(points),
    }
}

/// Computes the total surface area of a shape.
///
/// Sums the area of every face. Faces are not checked for planarity and a
/// degenerate face simply contributes zero, unless strict mode is enabled.
pub struct SurfaceArea {
    params: MeasureParams,
    strict: bool,
}

impl SurfaceArea {
    /// Creates a new `SurfaceArea` query with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: MeasureParams::default(),
            strict: false,
        }
    }

    /// Sets custom measurement parameters.
    #[must_use]
    pub fn with_params(mut self, params: MeasureParams) -> Self {
        self.params = params;
        self
    }

    /// Rejects faces whose area is negligible next to their squared
    /// perimeter.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Executes the query, returning the area of each face in order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` in strict mode when a face has
    /// (near) zero area.
    pub fn per_face(&self, shape: &Shape) -> Result<Vec<f64>> {
        shape
            .faces()
            .iter()
            .enumerate()
            .map(|(index, face)| {
                let points = shape.face_positions(face)?;
                let area = face_area(&points);
                trace!(face = index, corners = points.len(), area, "face area");
                if self.strict
                    && area <= self.params.tolerance * polygon_perimeter(&points).powi(2)
                {
                    return Err(GeometryError::Degenerate(format!(
                        "face {index} ({}) has no area",
                        shape.face_labels(face).join(" ")
                    ))
                    .into());
                }
                Ok(area)
            })
            .collect()
    }

    /// Executes the query, returning the total surface area.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` in strict mode when a face has
    /// (near) zero area.
    pub fn execute(&self, shape: &Shape) -> Result<f64> {
        let total = self.per_face(shape)?.iter().fold(0.0, |acc, a| acc + a);
        debug!(faces = shape.face_count(), total, "surface area");
        Ok(total)
    }
}

impl Default for SurfaceArea {
    fn default() -> Self {
        Self::new()
    }
}
