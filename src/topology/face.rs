use super::point::PointId;

/// Data associated with a face of a shape.
///
/// A face is a planar polygon bounded by an ordered loop of points. The
/// loop is implicitly closed: the last point connects back to the first.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The boundary loop in winding order.
    pub points: Vec<PointId>,
}

impl FaceData {
    /// Creates a face from its boundary loop.
    #[must_use]
    pub fn new(points: Vec<PointId>) -> Self {
        Self { points }
    }

    /// Number of corners of the face.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the face has no corners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The directed boundary edges `(from, to)`, closing edge included.
    pub fn directed_edges(&self) -> impl Iterator<Item = (PointId, PointId)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}
