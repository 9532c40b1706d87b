use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRectError {
    NonFinite {
        min_real: f64,
        max_real: f64,
        min_imag: f64,
        max_imag: f64,
    },
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for PlaneRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite {
                min_real,
                max_real,
                min_imag,
                max_imag,
            } => {
                write!(
                    f,
                    "plane rect bounds must be finite: real [{}, {}], imag [{}, {}]",
                    min_real, max_real, min_imag, max_imag
                )
            }
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "plane rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for PlaneRectError {}

/// The region of the complex plane mapped onto the pixel grid.
///
/// Always finite with `min < max` on both axes; the only way to get one is
/// through a validating constructor. Viewports are replaced wholesale, never
/// edited in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRect {
    min_real: f64,
    max_real: f64,
    min_imag: f64,
    max_imag: f64,
}

impl PlaneRect {
    /// The full view shown on start-up and after a reset.
    pub const DEFAULT: Self = Self {
        min_real: -2.0,
        max_real: 2.0,
        min_imag: -2.0,
        max_imag: 2.0,
    };

    pub fn new(
        min_real: f64,
        max_real: f64,
        min_imag: f64,
        max_imag: f64,
    ) -> Result<Self, PlaneRectError> {
        let all_finite = [min_real, max_real, min_imag, max_imag]
            .iter()
            .all(|bound| bound.is_finite());

        if !all_finite {
            return Err(PlaneRectError::NonFinite {
                min_real,
                max_real,
                min_imag,
                max_imag,
            });
        }

        let width = max_real - min_real;
        let height = max_imag - min_imag;

        // Finite bounds can still be far enough apart to overflow.
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(PlaneRectError::InvalidSize { width, height });
        }

        Ok(Self {
            min_real,
            max_real,
            min_imag,
            max_imag,
        })
    }

    /// Builds a rect from two opposite corners given in any order.
    pub fn from_corners(a: Complex, b: Complex) -> Result<Self, PlaneRectError> {
        // f64::min and f64::max skip NaN, so check before normalizing.
        if !(a.is_finite() && b.is_finite()) {
            return Err(PlaneRectError::NonFinite {
                min_real: a.real,
                max_real: b.real,
                min_imag: a.imag,
                max_imag: b.imag,
            });
        }

        Self::new(
            a.real.min(b.real),
            a.real.max(b.real),
            a.imag.min(b.imag),
            a.imag.max(b.imag),
        )
    }

    #[must_use]
    pub fn min_real(&self) -> f64 {
        self.min_real
    }

    #[must_use]
    pub fn max_real(&self) -> f64 {
        self.max_real
    }

    #[must_use]
    pub fn min_imag(&self) -> f64 {
        self.min_imag
    }

    #[must_use]
    pub fn max_imag(&self) -> f64 {
        self.max_imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_real - self.min_real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_imag - self.min_imag
    }

    #[must_use]
    pub fn contains(&self, point: Complex) -> bool {
        self.min_real <= point.real
            && point.real <= self.max_real
            && self.min_imag <= point.imag
            && point.imag <= self.max_imag
    }
}

impl Default for PlaneRect {
    fn default() -> Self {
        Self::DEFAULT
    }
}
