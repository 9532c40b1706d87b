use crate::core::actions::render_slice::ports::escape_time_algorithm::{
    Escape, EscapeTimeAlgorithm,
};
use crate::core::data::complex::Complex;

/// The quadratic map `z ← z² + c` starting from `z = 0`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Mandelbrot;

impl EscapeTimeAlgorithm for Mandelbrot {
    fn classify(&self, c: Complex, iteration_cap: u32) -> Escape {
        classify(c, iteration_cap)
    }

    fn display_name(&self) -> &str {
        "Mandelbrot"
    }
}

/// Decides whether the orbit of `c` stays within radius 2 for
/// `iteration_cap` steps.
///
/// The magnitude is tested before each squaring, so a cap of 1 only checks
/// `z0 = 0` and every point is bounded.
#[must_use]
pub fn classify(c: Complex, iteration_cap: u32) -> Escape {
    let mut z = Complex::ZERO;

    for iteration in 0..iteration_cap {
        if z.magnitude_squared() > 4.0 {
            return Escape::Unbounded {
                iterations: iteration,
            };
        }
        z = z.square() + c;
    }

    Escape::Bounded
}
