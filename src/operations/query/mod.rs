mod area;
mod convex_hull;
mod is_valid;
mod outline;
mod volume;

pub use area::{face_area, SurfaceArea};
pub use convex_hull::{ConvexHullMetrics, HullMesh, HullMetrics};
pub use is_valid::IsValid;
pub use outline::{Outline, OutlineEdge, ShapeOutline};
pub use volume::{Volume, VolumeMethod};

/// Parameters shared by the measurement queries.
#[derive(Debug, Clone, Copy)]
pub struct MeasureParams {
    /// Relative tolerance for flatness tests. Points count as coplanar
    /// within `tolerance` times the size of the point set, and a face is
    /// degenerate when its area is below `tolerance` times its squared
    /// perimeter.
    pub tolerance: f64,
    /// Distance above a hull facet at which a point counts as outside it,
    /// measured after the points are scaled to unit extent.
    pub hull_threshold: f64,
    /// Upper bound on hull refinement steps, `None` for unbounded.
    pub hull_max_iterations: Option<usize>,
}

impl Default for MeasureParams {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            hull_threshold: 1e-9,
            hull_max_iterations: None,
        }
    }
}
