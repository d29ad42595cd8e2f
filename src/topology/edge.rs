use super::point::PointId;

/// How many faces meet at an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Used by a single face: the surface is open along this edge.
    Boundary,
    /// Shared by exactly two faces.
    Manifold,
    /// Shared by more than two faces.
    NonManifold,
}

impl EdgeKind {
    /// Classifies an edge by the number of faces using it.
    #[must_use]
    pub fn from_face_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Boundary,
            2 => Self::Manifold,
            _ => Self::NonManifold,
        }
    }
}

/// An undirected edge of a shape.
///
/// `start` and `end` keep the direction of the first face that used the
/// edge.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// First endpoint.
    pub start: PointId,
    /// Second endpoint.
    pub end: PointId,
    /// Number of faces whose boundary contains this edge.
    pub face_count: usize,
}

impl EdgeData {
    /// Classification of this edge.
    #[must_use]
    pub fn kind(&self) -> EdgeKind {
        EdgeKind::from_face_count(self.face_count)
    }
}

/// Order-independent key for an undirected edge.
pub(crate) fn edge_key(a: PointId, b: PointId) -> (PointId, PointId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
