use crate::core::data::grid_size::GridSize;
use crate::core::data::plane_rect::{PlaneRect, PlaneRectError};
use crate::core::data::point::CanvasPoint;
use crate::core::util::pixel_to_plane_coords::{CoordinateMappingError, PlaneMapping};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SelectionError {
    /// The selection has no area on at least one axis, e.g. a click without a
    /// drag, or a drag narrower than `f64` can resolve at this zoom.
    Degenerate {
        start: CanvasPoint,
        end: CanvasPoint,
    },
    Mapping(CoordinateMappingError),
    Viewport(PlaneRectError),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate { start, end } => write!(
                f,
                "selection from ({}, {}) to ({}, {}) has no area",
                start.x, start.y, end.x, end.y
            ),
            Self::Mapping(err) => write!(f, "cannot map selection: {}", err),
            Self::Viewport(err) => write!(f, "selection gives an invalid viewport: {}", err),
        }
    }
}

impl Error for SelectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Degenerate { .. } => None,
            Self::Mapping(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<CoordinateMappingError> for SelectionError {
    fn from(err: CoordinateMappingError) -> Self {
        Self::Mapping(err)
    }
}

/// Turns a drag between two canvas points into the next viewport.
///
/// Both points go through the *current* viewport's mapping; the result is
/// normalized, so dragging in any direction gives the same rect.
pub fn derive_viewport_from_selection(
    current: PlaneRect,
    grid: GridSize,
    start: CanvasPoint,
    end: CanvasPoint,
) -> Result<PlaneRect, SelectionError> {
    let mapping = PlaneMapping::new(current, grid)?;

    let a = mapping.canvas_to_plane(start);
    let b = mapping.canvas_to_plane(end);

    PlaneRect::from_corners(a, b).map_err(|err| match err {
        PlaneRectError::InvalidSize { .. } => SelectionError::Degenerate { start, end },
        PlaneRectError::NonFinite { .. } => SelectionError::Viewport(err),
    })
}
