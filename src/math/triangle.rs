use super::Point3;

/// Area of the triangle `p1 p2 p3` by Heron's formula.
///
/// The radicand is clamped to zero, so collinear or coincident points give
/// `0.0` instead of NaN.
#[must_use]
pub fn triangle_area(p1: &Point3, p2: &Point3, p3: &Point3) -> f64 {
    let a = nalgebra::distance(p1, p2);
    let b = nalgebra::distance(p2, p3);
    let c = nalgebra::distance(p3, p1);
    let s = (a + b + c) * 0.5;
    let radicand = s * (s - a) * (s - b) * (s - c);
    radicand.max(0.0).sqrt()
}

/// Area of a planar quadrilateral split along the `p1 p3` diagonal.
///
/// The points must be coplanar and wound consistently. Only convex quads
/// (or quads whose `p1 p3` diagonal lies inside) are measured correctly.
#[must_use]
pub fn quad_area(p1: &Point3, p2: &Point3, p3: &Point3, p4: &Point3) -> f64 {
    triangle_area(p1, p2, p3) + triangle_area(p1, p3, p4)
}

/// Per-face volume term `|p1 · ((p2 - p1) × (p3 - p1))| / 6`.
///
/// `_p4` is accepted so a quad face can be passed whole, but it does not
/// enter the formula. This is the volume of the tetrahedron spanned by the
/// origin and the first three corners, so summed over the faces of a solid
/// it is *not* the solid's volume in general and it changes when the solid
/// moves. Use [`signed_tetrahedron_volume`] for a
/// real decomposition.
#[must_use]
pub fn face_tetra_volume(p1: &Point3, p2: &Point3, p3: &Point3, _p4: &Point3) -> f64 {
    let cross = (p2 - p1).cross(&(p3 - p1));
    p1.coords.dot(&cross).abs() / 6.0
}

/// Signed volume of the tetrahedron `apex a b c`.
///
/// Positive when `a b c` winds counter-clockwise seen from outside, i.e.
/// when the apex lies behind the triangle's right-hand normal.
#[must_use]
pub fn signed_tetrahedron_volume(apex: &Point3, a: &Point3, b: &Point3, c: &Point3) -> f64 {
    let da = a - apex;
    let db = b - apex;
    let dc = c - apex;
    da.dot(&db.cross(&dc)) / 6.0
}

/// Unsigned volume of the tetrahedron with vertices `a b c d`.
#[must_use]
pub fn tetrahedron_volume(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> f64 {
    signed_tetrahedron_volume(a, b, c, d).abs()
}
