use crate::error::Result;
use crate::math::Point3;
use crate::topology::{EdgeKind, Shape};

/// An edge of the outline, resolved to coordinates.
#[derive(Debug, Clone)]
pub struct OutlineEdge {
    /// Label of the first endpoint.
    pub start_label: String,
    /// Label of the second endpoint.
    pub end_label: String,
    /// Position of the first endpoint.
    pub start: Point3,
    /// Position of the second endpoint.
    pub end: Point3,
    /// How many faces meet at this edge.
    pub kind: EdgeKind,
}

/// Face loops and edges of a shape, ready for a renderer.
#[derive(Debug, Clone, Default)]
pub struct ShapeOutline {
    /// One closed coordinate loop per face, in face order.
    pub faces: Vec<Vec<Point3>>,
    /// Every undirected edge once, in first-seen order.
    pub edges: Vec<OutlineEdge>,
}

impl ShapeOutline {
    /// Edges shared by exactly two faces.
    pub fn manifold_edges(&self) -> impl Iterator<Item = &OutlineEdge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Manifold)
    }

    /// Edges not shared by exactly two faces. A renderer can draw these
    /// differently, e.g. dashed.
    pub fn irregular_edges(&self) -> impl Iterator<Item = &OutlineEdge> {
        self.edges.iter().filter(|e| e.kind != EdgeKind::Manifold)
    }
}

/// Extracts the face loops and classified edges of a shape.
pub struct Outline;

impl Outline {
    /// Creates a new `Outline` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if a face or edge refers to an unknown point.
    pub fn execute(&self, shape: &Shape) -> Result<ShapeOutline> {
        let faces = shape
            .faces()
            .iter()
            .map(|face| shape.face_positions(face))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut edges = Vec::new();
        for edge in shape.edges() {
            let start = shape.point(edge.start)?;
            let end = shape.point(edge.end)?;
            edges.push(OutlineEdge {
                start_label: start.label.clone(),
                end_label: end.label.clone(),
                start: start.position,
                end: end.position,
                kind: edge.kind(),
            });
        }

        Ok(ShapeOutline { faces, edges })
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}
