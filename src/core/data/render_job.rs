use crate::core::data::grid_size::GridSize;
use crate::core::data::plane_rect::{PlaneRect, PlaneRectError};
use std::error::Error;
use std::fmt;

/// Reasons a render is refused at submission. Nothing is started and no
/// generation is consumed when one of these is returned.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigurationError {
    ZeroIterationCap,
    Viewport(PlaneRectError),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterationCap => write!(f, "iteration cap must be at least 1"),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
        }
    }
}

impl Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroIterationCap => None,
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<PlaneRectError> for ConfigurationError {
    fn from(err: PlaneRectError) -> Self {
        Self::Viewport(err)
    }
}

/// What the caller asks for: a snapshot of everything one render needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub viewport: PlaneRect,
    pub iteration_cap: u32,
    pub grid: GridSize,
}

impl RenderRequest {
    #[must_use]
    pub const fn new(viewport: PlaneRect, iteration_cap: u32, grid: GridSize) -> Self {
        Self {
            viewport,
            iteration_cap,
            grid,
        }
    }

    /// Builds a request from raw bounds, rejecting anything the evaluator
    /// cannot run on.
    pub fn from_bounds(
        min_real: f64,
        max_real: f64,
        min_imag: f64,
        max_imag: f64,
        iteration_cap: u32,
        grid: GridSize,
    ) -> Result<Self, ConfigurationError> {
        let viewport = PlaneRect::new(min_real, max_real, min_imag, max_imag)?;
        let request = Self::new(viewport, iteration_cap, grid);
        request.validate()?;

        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.iteration_cap == 0 {
            return Err(ConfigurationError::ZeroIterationCap);
        }

        Ok(())
    }
}

/// One full-grid computation, tagged with the generation that owns it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderJob {
    pub viewport: PlaneRect,
    pub iteration_cap: u32,
    pub grid: GridSize,
    pub generation: u64,
}

impl RenderJob {
    pub fn new(request: RenderRequest, generation: u64) -> Result<Self, ConfigurationError> {
        request.validate()?;

        Ok(Self {
            viewport: request.viewport,
            iteration_cap: request.iteration_cap,
            grid: request.grid,
            generation,
        })
    }

    #[must_use]
    pub fn total_pixels(&self) -> usize {
        self.grid.pixel_count()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Running,
    Completed,
    Cancelled,
}

impl JobState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_iteration_cap_is_rejected() {
        let request = RenderRequest::new(PlaneRect::DEFAULT, 0, GridSize::square(4));

        assert_eq!(request.validate(), Err(ConfigurationError::ZeroIterationCap));
        assert_eq!(
            RenderJob::new(request, 1),
            Err(ConfigurationError::ZeroIterationCap)
        );
    }

    #[test]
    fn test_iteration_cap_of_one_is_accepted() {
        let request = RenderRequest::new(PlaneRect::DEFAULT, 1, GridSize::square(4));

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_from_bounds_rejects_inverted_viewport() {
        let result = RenderRequest::from_bounds(2.0, -2.0, -2.0, 2.0, 100, GridSize::square(4));

        assert!(matches!(
            result,
            Err(ConfigurationError::Viewport(PlaneRectError::InvalidSize { .. }))
        ));
    }

    #[test]
    fn test_from_bounds_rejects_non_finite_viewport() {
        let result =
            RenderRequest::from_bounds(f64::NAN, 2.0, -2.0, 2.0, 100, GridSize::square(4));

        assert!(matches!(
            result,
            Err(ConfigurationError::Viewport(PlaneRectError::NonFinite { .. }))
        ));
    }

    #[test]
    fn test_zero_size_grid_is_not_an_error() {
        let result = RenderRequest::from_bounds(-2.0, 2.0, -2.0, 2.0, 100, GridSize::new(0, 0));

        assert!(result.is_ok());
    }

    #[test]
    fn test_job_copies_request_and_generation() {
        let request = RenderRequest::new(PlaneRect::DEFAULT, 50, GridSize::new(8, 6));
        let job = RenderJob::new(request, 7).unwrap();

        assert_eq!(job.generation, 7);
        assert_eq!(job.iteration_cap, 50);
        assert_eq!(job.total_pixels(), 48);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!JobState::Pending.is_terminal());
        assert!(!JobState::Running.is_terminal());
        assert!(JobState::Completed.is_terminal());
        assert!(JobState::Cancelled.is_terminal());
    }

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::from(PlaneRectError::InvalidSize {
            width: 0.0,
            height: 1.0,
        });

        assert_eq!(
            err.to_string(),
            "invalid viewport: plane rect size must be positive: 0x1"
        );
        assert!(err.source().is_some());
    }
}
