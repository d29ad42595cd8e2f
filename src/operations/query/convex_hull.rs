use chull::ConvexHull;
use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::{is_coplanar, triangle_area, Point3, Vector3};
use crate::topology::Shape;

use super::MeasureParams;

/// Triangulated boundary of a convex hull.
///
/// Only produced by [`ConvexHullMetrics`], so every index is in range.
#[derive(Debug, Clone, Default)]
pub struct HullMesh {
    vertices: Vec<Point3>,
    indices: Vec<[usize; 3]>,
}

impl HullMesh {
    /// Hull vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Triangle indices into [`HullMesh::vertices`].
    #[must_use]
    pub fn indices(&self) -> &[[usize; 3]] {
        &self.indices
    }

    /// Iterates over the hull triangles as coordinate triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        self.indices.iter().filter_map(|&[a, b, c]| {
            Some([
                *self.vertices.get(a)?,
                *self.vertices.get(b)?,
                *self.vertices.get(c)?,
            ])
        })
    }

    /// Sum of the triangle areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.triangles()
            .fold(0.0, |acc, [a, b, c]| acc + triangle_area(&a, &b, &c))
    }
}

/// Area, volume and boundary of a convex hull.
#[derive(Debug, Clone)]
pub struct HullMetrics {
    /// Surface area of the hull.
    pub area: f64,
    /// Enclosed volume of the hull.
    pub volume: f64,
    /// The hull boundary, for display.
    pub mesh: HullMesh,
}

/// Computes the convex hull of a point set and measures it.
///
/// Hull construction is delegated to the `chull` crate (QuickHull). The
/// input must contain at least four points that do not all lie in one
/// plane; this is checked up front so a flat input is reported as
/// degenerate geometry rather than as a hull failure.
pub struct ConvexHullMetrics {
    points: Vec<Point3>,
    params: MeasureParams,
}

impl ConvexHullMetrics {
    /// Creates a new query over an unordered point set.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            points,
            params: MeasureParams::default(),
        }
    }

    /// Creates a query over all points of a shape, ignoring its faces.
    #[must_use]
    pub fn of_shape(shape: &Shape) -> Self {
        Self::new(shape.positions())
    }

    /// Sets custom measurement parameters.
    #[must_use]
    pub fn with_params(mut self, params: MeasureParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// - `GeometryError::Degenerate` if there are fewer than four points or
    ///   all points are coplanar.
    /// - `OperationError::Failed` if the hull library rejects the input.
    pub fn execute(&self) -> Result<HullMetrics> {
        if self.points.len() < 4 {
            return Err(GeometryError::Degenerate(format!(
                "convex hull needs at least 4 points, got {}",
                self.points.len()
            ))
            .into());
        }

        // The hull is built on points centered at their mean and scaled to
        // unit extent, so the thresholds are relative to the point set and
        // far-off coordinates do not cancel in the volume sum.
        #[allow(clippy::cast_precision_loss)]
        let count = self.points.len() as f64;
        let center = Point3::from(
            self.points
                .iter()
                .fold(Vector3::zeros(), |acc, p| acc + p.coords)
                / count,
        );
        let extent = self
            .points
            .iter()
            .map(|p| nalgebra::distance(p, &center))
            .fold(0.0, f64::max);
        if extent <= f64::MIN_POSITIVE {
            return Err(GeometryError::Degenerate("all points coincide".into()).into());
        }
        let normalized: Vec<Point3> = self
            .points
            .iter()
            .map(|p| Point3::from((p - center) / extent))
            .collect();
        if is_coplanar(&normalized, self.params.tolerance) {
            return Err(GeometryError::Degenerate(
                "all points are coplanar, the hull has no volume".into(),
            )
            .into());
        }

        let input: Vec<Vec<f64>> = normalized.iter().map(|p| vec![p.x, p.y, p.z]).collect();
        let hull = ConvexHull::try_new(
            &input,
            self.params.hull_threshold,
            self.params.hull_max_iterations,
        )
        .map_err(|e| OperationError::Failed(format!("convex hull: {e:?}")))?;

        let (raw_vertices, raw_indices) = hull.vertices_indices();
        let unit_mesh = to_mesh(&raw_vertices, &raw_indices)?;
        let area = unit_mesh.area() * extent.powi(2);
        let volume = hull.volume().abs() * extent.powi(3);
        let mesh = HullMesh {
            vertices: unit_mesh
                .vertices
                .iter()
                .map(|v| center + v.coords * extent)
                .collect(),
            indices: unit_mesh.indices,
        };

        debug!(
            points = self.points.len(),
            facets = mesh.indices.len(),
            extent,
            area,
            volume,
            "convex hull measured"
        );
        Ok(HullMetrics { area, volume, mesh })
    }
}

fn to_mesh(vertices: &[Vec<f64>], indices: &[usize]) -> Result<HullMesh> {
    let vertices = vertices
        .iter()
        .map(|v| match v.as_slice() {
            [x, y, z] => Ok(Point3::new(*x, *y, *z)),
            other => Err(OperationError::Failed(format!(
                "convex hull returned a {}-dimensional vertex",
                other.len()
            ))),
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if indices.len() % 3 != 0 || indices.iter().any(|&i| i >= vertices.len()) {
        return Err(OperationError::Failed("convex hull returned malformed facets".into()).into());
    }
    let indices = indices
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();

    Ok(HullMesh { vertices, indices })
}
