use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a labeled point in a shape.
    pub struct PointId;
}

/// A labeled corner of a shape.
#[derive(Debug, Clone)]
pub struct PointData {
    /// The label the point was declared with, unique within its shape.
    pub label: String,
    /// The 3D position of the point.
    pub position: Point3,
}

impl PointData {
    /// Creates a new labeled point.
    #[must_use]
    pub fn new(label: impl Into<String>, position: Point3) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}
