pub mod builder;
pub mod edge;
pub mod face;
pub mod point;

pub use builder::ShapeBuilder;
pub use edge::{EdgeData, EdgeKind};
pub use face::FaceData;
pub use point::{PointData, PointId};

use std::collections::HashMap;

use crate::error::ShapeError;
use crate::math::Point3;
use slotmap::SlotMap;

/// A polyhedron given as labeled points and the faces that bound it.
///
/// Points live in a slot-map arena and faces refer to them by [`PointId`].
/// A `Shape` is only produced by [`ShapeBuilder::build`], which guarantees
/// unique labels, finite coordinates and faces of at least three known
/// points. Whether the faces close up into a solid is not checked here.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    points: SlotMap<PointId, PointData>,
    labels: HashMap<String, PointId>,
    faces: Vec<FaceData>,
}

impl Shape {
    /// Starts building a new shape.
    #[must_use]
    pub fn builder() -> ShapeBuilder {
        ShapeBuilder::new()
    }

    // --- Point access ---

    /// Returns a reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not part of this shape.
    pub fn point(&self, id: PointId) -> Result<&PointData, ShapeError> {
        self.points
            .get(id)
            .ok_or_else(|| ShapeError::EntityNotFound("point".into()))
    }

    /// Looks a point up by its label.
    #[must_use]
    pub fn point_id(&self, label: &str) -> Option<PointId> {
        self.labels.get(label).copied()
    }

    /// Returns the position of the point with the given label.
    ///
    /// # Errors
    ///
    /// Returns an error if no point carries that label.
    pub fn position(&self, label: &str) -> Result<Point3, ShapeError> {
        let id = self
            .point_id(label)
            .ok_or_else(|| ShapeError::EntityNotFound(format!("point {label}")))?;
        Ok(self.point(id)?.position)
    }

    /// Iterates over all points in declaration order.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &PointData)> {
        self.points.iter()
    }

    /// Positions of all points in declaration order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point3> {
        self.points.values().map(|p| p.position).collect()
    }

    /// Number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    // --- Face access ---

    /// The faces of the shape in declaration order.
    #[must_use]
    pub fn faces(&self) -> &[FaceData] {
        &self.faces
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Resolves the boundary loop of a face to coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the face refers to a point outside this shape.
    pub fn face_positions(&self, face: &FaceData) -> Result<Vec<Point3>, ShapeError> {
        face.points
            .iter()
            .map(|&id| self.point(id).map(|p| p.position))
            .collect()
    }

    /// The labels of a face's boundary loop, for diagnostics.
    #[must_use]
    pub fn face_labels(&self, face: &FaceData) -> Vec<&str> {
        face.points
            .iter()
            .filter_map(|&id| self.points.get(id))
            .map(|p| p.label.as_str())
            .collect()
    }

    // --- Edge access ---

    /// All undirected edges in first-seen order, with the number of faces
    /// sharing each.
    #[must_use]
    pub fn edges(&self) -> Vec<EdgeData> {
        let mut index: HashMap<(PointId, PointId), usize> = HashMap::new();
        let mut edges: Vec<EdgeData> = Vec::new();
        for face in &self.faces {
            for (from, to) in face.directed_edges() {
                let slot = *index.entry(edge::edge_key(from, to)).or_insert_with(|| {
                    edges.push(EdgeData {
                        start: from,
                        end: to,
                        face_count: 0,
                    });
                    edges.len() - 1
                });
                edges[slot].face_count += 1;
            }
        }
        edges
    }

    /// Checks that every directed edge is matched by exactly one traversal
    /// in the opposite direction.
    ///
    /// This holds exactly when the faces form closed, consistently wound
    /// surfaces.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InconsistentWinding` naming the first edge that
    /// is unmatched or traversed twice in the same direction.
    pub fn check_winding(&self) -> Result<(), ShapeError> {
        let mut directed: HashMap<(PointId, PointId), usize> = HashMap::new();
        for face in &self.faces {
            for edge in face.directed_edges() {
                *directed.entry(edge).or_insert(0) += 1;
            }
        }
        for face in &self.faces {
            for (from, to) in face.directed_edges() {
                let forward = directed.get(&(from, to)).copied().unwrap_or(0);
                let backward = directed.get(&(to, from)).copied().unwrap_or(0);
                if forward != 1 || backward != 1 {
                    return Err(ShapeError::InconsistentWinding {
                        from: self.point(from)?.label.clone(),
                        to: self.point(to)?.label.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Mean of all point positions, or the origin for an empty shape.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        if self.points.is_empty() {
            return Point3::origin();
        }
        let sum = self
            .points
            .values()
            .fold(nalgebra::Vector3::zeros(), |acc, p| acc + p.position.coords);
        #[allow(clippy::cast_precision_loss)]
        let n = self.points.len() as f64;
        Point3::from(sum / n)
    }
}
