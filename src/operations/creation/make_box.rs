use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::Shape;

/// Edge lengths of a rectangular box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMeasure {
    /// Length of the first edge.
    pub length: f64,
    /// Length of the second edge.
    pub width: f64,
    /// Length of the third edge.
    pub height: f64,
}

impl BoxMeasure {
    /// `2 (lw + wh + hl)`.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        2.0 * (self.length * self.width + self.width * self.height + self.height * self.length)
    }

    /// `l w h`.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// Creates a rectangular box from a corner and its three edges.
pub struct MakeBox {
    corner: Point3,
    length: Vector3,
    width: Vector3,
    height: Vector3,
}

impl MakeBox {
    /// Creates an axis-aligned box from two opposite corners.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        let d = max_corner - min_corner;
        Self {
            corner: min_corner,
            length: Vector3::new(d.x, 0.0, 0.0),
            width: Vector3::new(0.0, d.y, 0.0),
            height: Vector3::new(0.0, 0.0, d.z),
        }
    }

    /// Creates a box from one corner and the far ends of the three edges
    /// leaving it. The edges may point in any direction but must be
    /// mutually perpendicular.
    #[must_use]
    pub fn from_corner(
        corner: Point3,
        length_end: Point3,
        width_end: Point3,
        height_end: Point3,
    ) -> Self {
        Self {
            corner,
            length: length_end - corner,
            width: width_end - corner,
            height: height_end - corner,
        }
    }

    /// Measures the box edges.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if an edge has zero length or two
    /// edges are not perpendicular.
    pub fn measure(&self) -> Result<BoxMeasure> {
        let edges = [self.length, self.width, self.height];
        let lengths = edges.map(|e| e.norm());
        if lengths.iter().any(|&l| l < TOLERANCE) {
            return Err(GeometryError::Degenerate("box edge has zero length".into()).into());
        }
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            let cos = edges[i].dot(&edges[j]) / (lengths[i] * lengths[j]);
            if cos.abs() > 1e-9 {
                return Err(GeometryError::Degenerate(format!(
                    "box edges {i} and {j} are not perpendicular"
                ))
                .into());
            }
        }
        let [length, width, height] = lengths;
        Ok(BoxMeasure {
            length,
            width,
            height,
        })
    }

    /// Builds the box as a shape with corners `A`..`H` and outward-wound
    /// faces. `A` is the corner, `B` the length end, `D` the width end and
    /// `E` the height end; `E`..`H` lie above `A`..`D`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`MakeBox::measure`].
    pub fn execute(&self) -> Result<Shape> {
        let measure = self.measure()?;
        let c = self.corner;
        let (l, w, h) = (self.length, self.width, self.height);

        let mut faces = [
            ["A", "D", "C", "B"],
            ["E", "F", "G", "H"],
            ["A", "B", "F", "E"],
            ["D", "H", "G", "C"],
            ["A", "E", "H", "D"],
            ["B", "C", "G", "F"],
        ];
        // The face list is outward for a right-handed (l, w, h).
        if l.cross(&w).dot(&h) < 0.0 {
            for face in &mut faces {
                face.reverse();
            }
        }

        let mut builder = Shape::builder()
            .point_at("A", c)
            .point_at("B", c + l)
            .point_at("C", c + l + w)
            .point_at("D", c + w)
            .point_at("E", c + h)
            .point_at("F", c + l + h)
            .point_at("G", c + l + w + h)
            .point_at("H", c + w + h);
        for face in &faces {
            builder = builder.face(face);
        }

        debug!(?measure, "box built");
        builder.build()
    }
}
