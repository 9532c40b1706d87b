/// Inclusive bounds of a UI control. These limit what a slider offers, not
/// what the renderer accepts: any cap of at least 1 and any grid size render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRange {
    pub min: u32,
    pub max: u32,
}

impl ControlRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const ITERATION_CAP_RANGE: ControlRange = ControlRange::new(50, 50_000);

/// Iteration slider offered next to the resolution control.
pub const COMPACT_ITERATION_CAP_RANGE: ControlRange = ControlRange::new(50, 500);

/// Square grid side length.
pub const RESOLUTION_RANGE: ControlRange = ControlRange::new(200, 800);

/// Progress line shown under the bar, one decimal place.
#[must_use]
pub fn format_progress(percent: f64) -> String {
    format!("{:.1}% complete", percent)
}
