use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Length of the closed boundary through `points`, including the closing edge.
#[must_use]
pub fn perimeter_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| nalgebra::distance(&points[i], &points[(i + 1) % n]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// Notched octagon: a 10x3 slab with a 6x2 block on top.
    fn notched() -> Vec<Point2> {
        vec![
            p(-5.0, 2.0),
            p(-3.0, 2.0),
            p(-3.0, 4.0),
            p(3.0, 4.0),
            p(3.0, 2.0),
            p(5.0, 2.0),
            p(5.0, -1.0),
            p(-5.0, -1.0),
        ]
    }

    #[test]
    fn ccw_square_is_positive() {
        let sq = [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        assert_relative_eq!(signed_area_2d(&sq), 4.0);
    }

    #[test]
    fn cw_square_is_negative() {
        let sq = [p(0.0, 0.0), p(0.0, 2.0), p(2.0, 2.0), p(2.0, 0.0)];
        assert_relative_eq!(signed_area_2d(&sq), -4.0);
    }

    #[test]
    fn non_convex_area_and_perimeter() {
        let poly = notched();
        assert_relative_eq!(signed_area_2d(&poly).abs(), 42.0);
        assert_relative_eq!(perimeter_2d(&poly), 30.0);
    }

    #[test]
    fn too_few_points() {
        assert_eq!(signed_area_2d(&[p(0.0, 0.0), p(1.0, 1.0)]), 0.0);
        assert_eq!(perimeter_2d(&[p(1.0, 1.0)]), 0.0);
    }
}
