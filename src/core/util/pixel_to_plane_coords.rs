use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::point::{CanvasPoint, Point};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CoordinateMappingError {
    EmptyGrid { grid: GridSize },
    PointOutsideGrid { point: Point, grid: GridSize },
}

impl fmt::Display for CoordinateMappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { grid } => {
                write!(
                    f,
                    "cannot map coordinates on an empty {}x{} grid",
                    grid.width, grid.height
                )
            }
            Self::PointOutsideGrid { point, grid } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} grid",
                    point.x, point.y, grid.width, grid.height
                )
            }
        }
    }
}

impl Error for CoordinateMappingError {}

/// Linear mapping between one grid and one viewport.
///
/// Built from a single job's own viewport and grid so a stale job can never
/// see another job's geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    viewport: PlaneRect,
    grid: GridSize,
    width: f64,
    height: f64,
}

impl PlaneMapping {
    pub fn new(viewport: PlaneRect, grid: GridSize) -> Result<Self, CoordinateMappingError> {
        if grid.is_empty() {
            return Err(CoordinateMappingError::EmptyGrid { grid });
        }

        Ok(Self {
            viewport,
            grid,
            width: f64::from(grid.width),
            height: f64::from(grid.height),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> PlaneRect {
        self.viewport
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn pixel_to_plane(&self, point: Point) -> Result<Complex, CoordinateMappingError> {
        if !self.grid.contains(point) {
            return Err(CoordinateMappingError::PointOutsideGrid {
                point,
                grid: self.grid,
            });
        }

        Ok(self.canvas_to_plane(point.into()))
    }

    /// Maps a linear row-major pixel index. `index` must be below the grid's
    /// pixel count.
    #[must_use]
    pub fn index_to_plane(&self, index: usize) -> Complex {
        self.canvas_to_plane(self.grid.point_at(index).into())
    }

    /// Unchecked mapping for canvas positions, which may sit on or past the
    /// grid edge.
    #[must_use]
    pub fn canvas_to_plane(&self, point: CanvasPoint) -> Complex {
        Complex {
            real: self.viewport.min_real() + (point.x / self.width) * self.viewport.width(),
            imag: self.viewport.min_imag() + (point.y / self.height) * self.viewport.height(),
        }
    }

    #[must_use]
    pub fn plane_to_canvas(&self, c: Complex) -> CanvasPoint {
        CanvasPoint {
            x: (c.real - self.viewport.min_real()) / self.viewport.width() * self.width,
            y: (c.imag - self.viewport.min_imag()) / self.viewport.height() * self.height,
        }
    }
}

/// `real = min_real + (x / width) * width_of_viewport`, likewise for the
/// imaginary axis.
pub fn pixel_to_plane_coords(
    point: Point,
    grid: GridSize,
    viewport: PlaneRect,
) -> Result<Complex, CoordinateMappingError> {
    PlaneMapping::new(viewport, grid)?.pixel_to_plane(point)
}
