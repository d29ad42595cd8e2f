use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::{
    is_coplanar, polygon_perimeter, signed_area_2d, PlaneFrame, Point2, Point3, Vector3, TOLERANCE,
};
use crate::topology::Shape;

/// Closed-form measurements of a prism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrismMeasure {
    /// Area of one cap.
    pub base_area: f64,
    /// Perimeter of one cap.
    pub base_perimeter: f64,
    /// Distance between the cap planes.
    pub height: f64,
    /// Total area of the side faces.
    pub lateral_area: f64,
}

impl PrismMeasure {
    /// Both caps plus the sides.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        2.0 * self.base_area + self.lateral_area
    }

    /// Cap area times height.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.base_area * self.height
    }
}

/// Creates a prism by sweeping a planar base polygon along a vector.
///
/// The base may be non-convex. When the sweep is not perpendicular to the
/// base the prism is oblique and its side faces are parallelograms.
pub struct MakePrism {
    base: Vec<(String, Point3)>,
    extrusion: Vector3,
    top_labels: Option<Vec<String>>,
}

impl MakePrism {
    /// Creates a new `MakePrism` operation from a labeled base loop.
    #[must_use]
    pub fn new<S: Into<String>>(base: Vec<(S, Point3)>, extrusion: Vector3) -> Self {
        Self {
            base: base.into_iter().map(|(l, p)| (l.into(), p)).collect(),
            extrusion,
            top_labels: None,
        }
    }

    /// Names the swept copies of the base points, in base order.
    ///
    /// Without this the top point of base point `X` is labeled `X'`.
    #[must_use]
    pub fn with_top_labels<S: Into<String>>(mut self, labels: Vec<S>) -> Self {
        self.top_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    fn base_points(&self) -> Vec<Point3> {
        self.base.iter().map(|(_, p)| *p).collect()
    }

    /// Computes the prism measurements without building the shape.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the base has fewer than three
    /// points, is not planar or has no area, or if the sweep is parallel to
    /// the base plane.
    pub fn measure(&self) -> Result<PrismMeasure> {
        let pts = self.base_points();
        if pts.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "prism base needs at least 3 points, got {}",
                pts.len()
            ))
            .into());
        }
        if !is_coplanar(&pts, 1e-9) {
            return Err(GeometryError::Degenerate("prism base is not planar".into()).into());
        }

        let frame = PlaneFrame::of_polygon(&pts)?;
        let uv: Vec<Point2> = pts.iter().map(|p| frame.project(p)).collect();
        let base_area = signed_area_2d(&uv).abs();
        let base_perimeter = polygon_perimeter(&pts);

        let height = self.extrusion.dot(frame.normal()).abs();
        if height <= TOLERANCE * self.extrusion.norm() {
            return Err(
                GeometryError::Degenerate("sweep is parallel to the prism base".into()).into(),
            );
        }

        let n = pts.len();
        let lateral_area: f64 = (0..n)
            .map(|i| (pts[(i + 1) % n] - pts[i]).cross(&self.extrusion).norm())
            .sum();

        Ok(PrismMeasure {
            base_area,
            base_perimeter,
            height,
            lateral_area,
        })
    }

    /// Builds the prism as a closed, consistently wound shape.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`MakePrism::measure`], or
    /// `OperationError::InvalidInput` if the number of top labels does not
    /// match the base.
    pub fn execute(&self) -> Result<Shape> {
        let measure = self.measure()?;

        let top_labels: Vec<String> = match &self.top_labels {
            Some(labels) if labels.len() == self.base.len() => labels.clone(),
            Some(labels) => {
                return Err(OperationError::InvalidInput(format!(
                    "{} top labels for a base of {} points",
                    labels.len(),
                    self.base.len()
                ))
                .into())
            }
            None => self.base.iter().map(|(l, _)| format!("{l}'")).collect(),
        };

        // Orient the base loop so its normal points away from the sweep;
        // the cap then faces outward as given and the top cap reversed.
        let normal = *PlaneFrame::of_polygon(&self.base_points())?.normal();
        let mut order: Vec<usize> = (0..self.base.len()).collect();
        if normal.dot(&self.extrusion) > 0.0 {
            order.reverse();
        }

        let mut builder = Shape::builder();
        for (label, p) in &self.base {
            builder = builder.point_at(label.as_str(), *p);
        }
        for ((_, p), label) in self.base.iter().zip(&top_labels) {
            builder = builder.point_at(label.as_str(), p + self.extrusion);
        }

        let bottom: Vec<&str> = order.iter().map(|&i| self.base[i].0.as_str()).collect();
        let top: Vec<&str> = order.iter().rev().map(|&i| top_labels[i].as_str()).collect();
        builder = builder.face(&bottom).face(&top);

        let n = order.len();
        for k in 0..n {
            let i = order[k];
            let j = order[(k + 1) % n];
            builder = builder.face(&[
                self.base[j].0.as_str(),
                self.base[i].0.as_str(),
                top_labels[i].as_str(),
                top_labels[j].as_str(),
            ]);
        }

        debug!(?measure, corners = n, "prism built");
        builder.build()
    }
}
