use tracing::{debug, warn};

use crate::error::Result;
use crate::math::{face_tetra_volume, signed_tetrahedron_volume, vector_area};
use crate::topology::Shape;

use super::{ConvexHullMetrics, MeasureParams};

/// Algorithm used to compute the volume of a shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VolumeMethod {
    /// Volume of the convex hull of the shape's points. Faces are ignored,
    /// so this is exact only for convex shapes.
    #[default]
    ConvexHull,
    /// Signed tetrahedra from the centroid over fan-triangulated faces.
    ///
    /// Exact for any closed, consistently wound surface, convex or not.
    SignedDecomposition,
    /// Unsigned face pyramids with their apex at the coordinate origin.
    ///
    /// Exact only when the origin lies inside the solid and every face is
    /// fully visible from it (star-shaped with respect to the origin).
    FacePyramid,
    /// Sum of [`face_tetra_volume`] over the faces.
    ///
    /// Uses only the first three corners of each face and depends on where
    /// the shape sits relative to the origin, so it is not a volume in
    /// general. Selecting it logs a warning.
    LegacyFacePyramid,
}

/// Computes the volume of a shape.
pub struct Volume {
    method: VolumeMethod,
    params: MeasureParams,
}

impl Volume {
    /// Creates a new `Volume` query using the convex hull method.
    #[must_use]
    pub fn new() -> Self {
        Self {
            method: VolumeMethod::default(),
            params: MeasureParams::default(),
        }
    }

    /// Selects the volume algorithm.
    #[must_use]
    pub fn with_method(mut self, method: VolumeMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets custom measurement parameters.
    #[must_use]
    pub fn with_params(mut self, params: MeasureParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the volume (absolute value).
    ///
    /// # Errors
    ///
    /// - `ConvexHull`: see [`ConvexHullMetrics::execute`].
    /// - `SignedDecomposition`: `ShapeError::InconsistentWinding` if the
    ///   faces do not form closed, consistently wound surfaces.
    /// - Other methods only fail if a face refers to an unknown point.
    pub fn execute(&self, shape: &Shape) -> Result<f64> {
        let volume = match self.method {
            VolumeMethod::ConvexHull => {
                ConvexHullMetrics::of_shape(shape)
                    .with_params(self.params)
                    .execute()?
                    .volume
            }
            VolumeMethod::SignedDecomposition => signed_decomposition(shape)?,
            VolumeMethod::FacePyramid => {
                debug!("face pyramid volume assumes the origin lies inside the solid");
                face_pyramid(shape)?
            }
            VolumeMethod::LegacyFacePyramid => {
                warn!("legacy face pyramid volume is not a true volume for most shapes");
                legacy_face_pyramid(shape)?
            }
        };
        debug!(method = ?self.method, volume, "volume");
        Ok(volume)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new()
    }
}

fn signed_decomposition(shape: &Shape) -> Result<f64> {
    shape.check_winding()?;
    let apex = shape.centroid();
    let mut signed_volume = 0.0;
    for face in shape.faces() {
        let pts = shape.face_positions(face)?;
        let first = &pts[0];
        for pair in pts[1..].windows(2) {
            signed_volume += signed_tetrahedron_volume(&apex, first, &pair[0], &pair[1]);
        }
    }
    Ok(signed_volume.abs())
}

fn face_pyramid(shape: &Shape) -> Result<f64> {
    let mut volume = 0.0;
    for face in shape.faces() {
        let pts = shape.face_positions(face)?;
        // Pyramid of base area |A| and height |n . p0|, i.e. |A . p0| / 3.
        volume += vector_area(&pts).dot(&pts[0].coords).abs() / 3.0;
    }
    Ok(volume)
}

fn legacy_face_pyramid(shape: &Shape) -> Result<f64> {
    let mut volume = 0.0;
    for face in shape.faces() {
        let pts = shape.face_positions(face)?;
        // Triangular faces have no fourth corner; it is ignored anyway.
        let fourth = pts.get(3).unwrap_or(&pts[2]);
        volume += face_tetra_volume(&pts[0], &pts[1], &pts[2], fourth);
    }
    Ok(volume)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{PolymetricError, ShapeError};
    use approx::assert_relative_eq;

    fn cube(min: f64, max: f64) -> Shape {
        Shape::builder()
            .point("A", [min, min, min])
            .point("B", [max, min, min])
            .point("C", [max, max, min])
            .point("D", [min, max, min])
            .point("E", [min, min, max])
            .point("F", [max, min, max])
            .point("G", [max, max, max])
            .point("H", [min, max, max])
            .face(&["A", "D", "C", "B"])
            .face(&["E", "F", "G", "H"])
            .face(&["A", "B", "F", "E"])
            .face(&["D", "H", "G", "C"])
            .face(&["A", "E", "H", "D"])
            .face(&["B", "C", "G", "F"])
            .build()
            .unwrap()
    }

    fn volume(shape: &Shape, method: VolumeMethod) -> f64 {
        Volume::new().with_method(method).execute(shape).unwrap()
    }

    #[test]
    fn unit_cube_by_hull() {
        assert_relative_eq!(volume(&cube(0.0, 1.0), VolumeMethod::ConvexHull), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn unit_cube_by_signed_decomposition() {
        for (min, max) in [(0.0, 1.0), (-0.5, 0.5), (5.0, 6.0)] {
            let v = volume(&cube(min, max), VolumeMethod::SignedDecomposition);
            assert_relative_eq!(v, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn face_pyramid_needs_origin_inside() {
        let centered = volume(&cube(-0.5, 0.5), VolumeMethod::FacePyramid);
        assert_relative_eq!(centered, 1.0, epsilon = 1e-12);

        let off_center = volume(&cube(1.0, 2.0), VolumeMethod::FacePyramid);
        assert_relative_eq!(off_center, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn legacy_method_uses_first_three_corners() {
        // Each square face contributes |p1 . n| / 6 with |n| = 1.
        let centered = volume(&cube(-0.5, 0.5), VolumeMethod::LegacyFacePyramid);
        assert_relative_eq!(centered, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn l_shaped_solid_by_signed_decomposition() {
        // L-shaped profile in the yz plane (area 45) extruded 4 along x.
        let profile = [
            ("A", 0.0, 8.0),
            ("D", 10.0, 8.0),
            ("E", 10.0, 5.0),
            ("H", 3.0, 5.0),
            ("I", 3.0, 0.0),
            ("L", 0.0, 0.0),
        ];
        let mut builder = Shape::builder();
        for (label, y, z) in profile {
            builder = builder
                .point(label, [-1.0, y, z])
                .point(format!("{label}'"), [-5.0, y, z]);
        }
        let near: Vec<String> = profile.iter().map(|(l, _, _)| (*l).to_owned()).collect();
        let far: Vec<String> = near.iter().rev().map(|l| format!("{l}'")).collect();
        builder = builder.face(&near).face(&far);
        for i in 0..near.len() {
            let j = (i + 1) % near.len();
            builder = builder.face(&[
                near[j].clone(),
                near[i].clone(),
                format!("{}'", near[i]),
                format!("{}'", near[j]),
            ]);
        }
        let shape = builder.build().unwrap();

        let v = volume(&shape, VolumeMethod::SignedDecomposition);
        assert_relative_eq!(v, 180.0, epsilon = 1e-9);
        // The hull fills in the notch.
        let hull = volume(&shape, VolumeMethod::ConvexHull);
        assert!(hull > v + 1.0);
    }

    #[test]
    fn signed_decomposition_rejects_open_shape() {
        let shape = Shape::builder()
            .point("A", [0.0, 0.0, 0.0])
            .point("B", [1.0, 0.0, 0.0])
            .point("C", [0.0, 1.0, 0.0])
            .point("D", [0.0, 0.0, 1.0])
            .face(&["A", "C", "B"])
            .face(&["A", "B", "D"])
            .build()
            .unwrap();
        let err = Volume::new()
            .with_method(VolumeMethod::SignedDecomposition)
            .execute(&shape)
            .unwrap_err();
        assert!(matches!(
            err,
            PolymetricError::Shape(ShapeError::InconsistentWinding { .. })
        ));
    }
}
