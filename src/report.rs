use std::fmt;

use crate::error::Result;
use crate::operations::creation::HemisphereMeasure;
use crate::operations::query::{SurfaceArea, Volume, VolumeMethod};
use crate::topology::Shape;

/// A scalar result, optionally expressed as a multiple of π.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    value: f64,
    pi_multiple: bool,
}

impl Measurement {
    /// A plain value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            pi_multiple: false,
        }
    }

    /// A value to be read as `value · π`.
    #[must_use]
    pub fn pi_multiple(value: f64) -> Self {
        Self {
            value,
            pi_multiple: true,
        }
    }

    /// The stored coefficient (the multiple of π when `is_pi_multiple`).
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether the value is a multiple of π.
    #[must_use]
    pub fn is_pi_multiple(&self) -> bool {
        self.pi_multiple
    }

    /// The measurement as a plain number.
    #[must_use]
    pub fn resolved(&self) -> f64 {
        if self.pi_multiple {
            self.value * std::f64::consts::PI
        } else {
            self.value
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)?;
        if self.pi_multiple {
            f.write_str("π")?;
        }
        Ok(())
    }
}

/// Surface area and volume of one shape, formatted to two decimals.
///
/// ```
/// use polymetric::report::{Measurement, Report};
///
/// let report = Report::new(Measurement::new(144.0), Measurement::new(112.0));
/// assert_eq!(
///     report.to_string(),
///     "Total Surface Area: 144.00 square units\nTotal Volume: 112.00 cubic units"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Total surface area.
    pub area: Measurement,
    /// Enclosed volume.
    pub volume: Measurement,
}

impl Report {
    /// Creates a report from two measurements.
    #[must_use]
    pub fn new(area: Measurement, volume: Measurement) -> Self {
        Self { area, volume }
    }

    /// Measures a shape face by face, with the given volume method.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`SurfaceArea::execute`] and [`Volume::execute`].
    pub fn measure(shape: &Shape, method: VolumeMethod) -> Result<Self> {
        let area = SurfaceArea::new().execute(shape)?;
        let volume = Volume::new().with_method(method).execute(shape)?;
        Ok(Self::new(Measurement::new(area), Measurement::new(volume)))
    }

    /// Reports a hemisphere in multiples of π.
    #[must_use]
    pub fn hemisphere(measure: &HemisphereMeasure) -> Self {
        Self::new(
            Measurement::pi_multiple(measure.surface_area_over_pi()),
            Measurement::pi_multiple(measure.volume_over_pi()),
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Surface Area: {} square units", self.area)?;
        write!(f, "Total Volume: {} cubic units", self.volume)
    }
}
