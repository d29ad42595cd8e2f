use std::collections::HashMap;

use slotmap::SlotMap;
use tracing::trace;

use crate::error::{GeometryError, Result, ShapeError};
use crate::math::Point3;

use super::{FaceData, PointData, PointId, Shape};

/// Collects labeled points and faces, then validates them into a [`Shape`].
///
/// ```
/// use polymetric::topology::Shape;
///
/// let tetra = Shape::builder()
///     .point("A", [0.0, 0.0, 0.0])
///     .point("B", [1.0, 0.0, 0.0])
///     .point("C", [0.0, 1.0, 0.0])
///     .point("D", [0.0, 0.0, 1.0])
///     .face(&["A", "C", "B"])
///     .face(&["A", "B", "D"])
///     .face(&["B", "C", "D"])
///     .face(&["C", "A", "D"])
///     .build()?;
/// assert_eq!(tetra.face_count(), 4);
/// # Ok::<(), polymetric::PolymetricError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder {
    points: Vec<(String, Point3)>,
    faces: Vec<Vec<String>>,
}

impl ShapeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a labeled point from raw coordinates.
    #[must_use]
    pub fn point(self, label: impl Into<String>, coords: [f64; 3]) -> Self {
        self.point_at(label, Point3::from(coords))
    }

    /// Declares a labeled point.
    #[must_use]
    pub fn point_at(mut self, label: impl Into<String>, position: Point3) -> Self {
        self.points.push((label.into(), position));
        self
    }

    /// Declares a face as a loop of point labels in winding order.
    #[must_use]
    pub fn face<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        self.faces
            .push(labels.iter().map(|l| l.as_ref().to_owned()).collect());
        self
    }

    /// Validates the declarations and produces the shape.
    ///
    /// # Errors
    ///
    /// - `ShapeError::LabelCollision` if two points share a label.
    /// - `GeometryError::NonFinite` if a coordinate is NaN or infinite.
    /// - `ShapeError::TooFewVertices` if a face has fewer than three points.
    /// - `ShapeError::UnknownLabel` if a face names an undeclared point.
    pub fn build(self) -> Result<Shape> {
        let mut points: SlotMap<PointId, PointData> = SlotMap::with_key();
        let mut labels: HashMap<String, PointId> = HashMap::with_capacity(self.points.len());

        for (label, position) in self.points {
            if !position.iter().all(|c| c.is_finite()) {
                return Err(GeometryError::NonFinite { label }.into());
            }
            if labels.contains_key(&label) {
                return Err(ShapeError::LabelCollision(label).into());
            }
            let id = points.insert(PointData::new(label.clone(), position));
            labels.insert(label, id);
        }

        let mut faces = Vec::with_capacity(self.faces.len());
        for (face, loop_labels) in self.faces.into_iter().enumerate() {
            if loop_labels.len() < 3 {
                return Err(ShapeError::TooFewVertices {
                    face,
                    count: loop_labels.len(),
                }
                .into());
            }
            let ids = loop_labels
                .into_iter()
                .map(|label| {
                    labels
                        .get(&label)
                        .copied()
                        .ok_or(ShapeError::UnknownLabel { face, label })
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            faces.push(FaceData::new(ids));
        }

        trace!(points = points.len(), faces = faces.len(), "shape built");
        Ok(Shape {
            points,
            labels,
            faces,
        })
    }
}
