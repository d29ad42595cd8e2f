use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, TOLERANCE};

/// Closed-form measurements of a solid hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereMeasure {
    /// Radius of the hemisphere.
    pub radius: f64,
}

impl HemisphereMeasure {
    /// Area of the curved dome, `2 π r²`.
    #[must_use]
    pub fn curved_area(&self) -> f64 {
        2.0 * PI * self.radius.powi(2)
    }

    /// Area of the flat disc, `π r²`.
    #[must_use]
    pub fn base_area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    /// Dome plus disc, as a multiple of π: `3 r²`.
    #[must_use]
    pub fn surface_area_over_pi(&self) -> f64 {
        3.0 * self.radius.powi(2)
    }

    /// Dome plus disc, `3 π r²`.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        PI * self.surface_area_over_pi()
    }

    /// Volume as a multiple of π: `2/3 r³`.
    #[must_use]
    pub fn volume_over_pi(&self) -> f64 {
        2.0 / 3.0 * self.radius.powi(3)
    }

    /// Volume, `2/3 π r³`.
    #[must_use]
    pub fn volume(&self) -> f64 {
        PI * self.volume_over_pi()
    }
}

/// Describes a solid hemisphere by its radius.
pub struct MakeHemisphere {
    radius: f64,
}

impl MakeHemisphere {
    /// Creates a new `MakeHemisphere` operation.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Creates a hemisphere whose flat disc has the segment `a b` as a
    /// diameter.
    ///
    /// The radius is kept at full precision. A radius first rounded to two
    /// decimals gives slightly different results: a diameter of `√2` reports
    /// `1.50π` here but `1.51π` from a radius of `0.71`. Pass the rounded
    /// radius to [`MakeHemisphere::new`] to reproduce such figures.
    #[must_use]
    pub fn from_diameter(a: &Point3, b: &Point3) -> Self {
        Self::new(nalgebra::distance(a, b) / 2.0)
    }

    /// Executes the operation, returning the closed-form measurements.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the radius is zero, negative
    /// or not finite.
    pub fn execute(&self) -> Result<HemisphereMeasure> {
        if !self.radius.is_finite() || self.radius < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "hemisphere radius {} is not positive",
                self.radius
            ))
            .into());
        }
        Ok(HemisphereMeasure {
            radius: self.radius,
        })
    }
}
