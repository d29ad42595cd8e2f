use tracing::debug;

use crate::math::{is_coplanar, polygon_area_3d, polygon_perimeter};
use crate::topology::Shape;

use super::MeasureParams;

/// Checks whether a shape bounds a solid its face-based measurements can
/// be trusted for.
///
/// A valid shape has at least four faces, every face is planar and
/// encloses some area, and the faces form closed, consistently wound
/// surfaces.
pub struct IsValid {
    params: MeasureParams,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: MeasureParams::default(),
        }
    }

    /// Sets custom measurement parameters.
    #[must_use]
    pub fn with_params(mut self, params: MeasureParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the validation, returning `true` if the shape is valid.
    #[must_use]
    pub fn execute(&self, shape: &Shape) -> bool {
        if shape.face_count() < 4 {
            debug!(faces = shape.face_count(), "too few faces to bound a solid");
            return false;
        }
        for (index, face) in shape.faces().iter().enumerate() {
            let Ok(points) = shape.face_positions(face) else {
                return false;
            };
            if !is_coplanar(&points, self.params.tolerance) {
                debug!(face = index, "face is not planar");
                return false;
            }
            if polygon_area_3d(&points)
                <= self.params.tolerance * polygon_perimeter(&points).powi(2)
            {
                debug!(face = index, "face has no area");
                return false;
            }
        }
        if let Err(err) = shape.check_winding() {
            debug!(%err, "faces are not closed and consistently wound");
            return false;
        }
        true
    }
}

impl Default for IsValid {
    fn default() -> Self {
        Self::new()
    }
}
