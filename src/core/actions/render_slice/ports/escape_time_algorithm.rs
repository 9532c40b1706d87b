use crate::core::data::complex::Complex;

/// Outcome of iterating one point of the plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Escape {
    /// The orbit stayed inside the radius-2 disk for the whole iteration cap.
    Bounded,
    /// The orbit left the disk; `iterations` is the step at which it was seen
    /// outside, always below the cap.
    Unbounded { iterations: u32 },
}

impl Escape {
    #[must_use]
    pub const fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded)
    }
}

/// A pluggable escape-time formula.
///
/// Implementations must be pure: the same point and cap always give the same
/// answer, so they can be shared freely across threads.
pub trait EscapeTimeAlgorithm: Send + Sync {
    fn classify(&self, c: Complex, iteration_cap: u32) -> Escape;

    fn display_name(&self) -> &str;
}
