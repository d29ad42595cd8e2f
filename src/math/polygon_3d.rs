use crate::error::{GeometryError, Result};

use super::{Point2, Point3, Vector3, TOLERANCE};

/// An orthonormal frame spanning the plane of a polygon.
///
/// `normal = u_dir × v_dir`.
#[derive(Debug, Clone)]
pub struct PlaneFrame {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl PlaneFrame {
    /// Creates a frame from an origin and a normal vector.
    ///
    /// The U and V directions are computed automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::Degenerate("zero-length plane normal".into()).into());
        }
        let normal = normal / len;

        // Choose a reference vector not parallel to the normal
        let reference = if normal.x.abs() < 0.9 {
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };

        let u_dir = normal.cross(&reference).normalize();
        let v_dir = normal.cross(&u_dir);

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Creates the frame of a planar polygon, oriented by its winding.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon has no area.
    pub fn of_polygon(points: &[Point3]) -> Result<Self> {
        let normal = polygon_normal(points)?;
        Self::from_normal(points[0], normal)
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Projects a 3D point onto the UV coordinate system of the plane.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        let diff = point - self.origin;
        Point2::new(diff.dot(&self.u_dir), diff.dot(&self.v_dir))
    }
}

/// Vector area of a closed polygon (Newell's method).
///
/// The direction is the right-hand normal of the winding and the magnitude
/// is the enclosed area when the polygon is planar.
#[must_use]
pub fn vector_area(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut cross_sum = Vector3::zeros();
    if n < 3 {
        return cross_sum;
    }
    let o = &points[0];
    for i in 1..n - 1 {
        let a = points[i] - o;
        let b = points[i + 1] - o;
        cross_sum += a.cross(&b);
    }
    cross_sum * 0.5
}

/// Compute the area of a planar 3D polygon.
///
/// This is the shoelace formula evaluated in the polygon's own plane, so it
/// handles non-convex loops of any length.
#[must_use]
pub fn polygon_area_3d(points: &[Point3]) -> f64 {
    vector_area(points).norm()
}

/// Unit normal of a polygon following its winding.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the polygon has fewer than three
/// points or its area is negligible next to its squared perimeter.
pub fn polygon_normal(points: &[Point3]) -> Result<Vector3> {
    let area = vector_area(points);
    let len = area.norm();
    if len <= TOLERANCE * polygon_perimeter(points).powi(2) {
        return Err(GeometryError::Degenerate(format!(
            "polygon of {} points encloses no area",
            points.len()
        ))
        .into());
    }
    Ok(area / len)
}

/// Length of the closed boundary through `points`, including the closing edge.
#[must_use]
pub fn polygon_perimeter(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| nalgebra::distance(&points[i], &points[(i + 1) % n]))
        .sum()
}

/// Returns `true` when every point lies within `tolerance` of one plane.
///
/// `tolerance` is relative to the size of the point set (the largest
/// distance from the first point), so the test does not depend on scale.
/// Fewer than four points are always coplanar.
#[must_use]
pub fn is_coplanar(points: &[Point3], tolerance: f64) -> bool {
    if points.len() < 4 {
        return true;
    }
    let Some((normal, origin, size)) = spanning_plane(points, tolerance) else {
        // All points collinear or coincident.
        return true;
    };
    points
        .iter()
        .all(|q| (q - origin).dot(&normal).abs() <= tolerance * size)
}

/// Finds a plane through three non-collinear points of the set.
///
/// Picks the point farthest from the first, then the one farthest from
/// the line through both, so near-collinear prefixes do not matter.
fn spanning_plane(points: &[Point3], tolerance: f64) -> Option<(Vector3, Point3, f64)> {
    let a = points[0];
    let b = points
        .iter()
        .max_by(|p, q| {
            nalgebra::distance_squared(&a, *p).total_cmp(&nalgebra::distance_squared(&a, *q))
        })
        .copied()?;
    let ab = b - a;
    let size = ab.norm();
    if size <= f64::MIN_POSITIVE {
        return None;
    }
    let normal = points
        .iter()
        .map(|c| ab.cross(&(c - a)))
        .max_by(|m, n| m.norm_squared().total_cmp(&n.norm_squared()))?;
    let len = normal.norm();
    if len <= tolerance * size * size {
        return None;
    }
    Some((normal / len, a, size))
}
