use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::point::CanvasPoint;
use crate::core::util::derive_viewport_from_selection::{
    SelectionError, derive_viewport_from_selection,
};

/// Keeps the viewport the next render should use.
///
/// Zooming replaces the current viewport with the selected sub-rect; reset
/// restores the home viewport exactly, however deep the zoom went.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportNavigator {
    home: PlaneRect,
    current: PlaneRect,
    zoom_depth: u32,
}

impl ViewportNavigator {
    #[must_use]
    pub fn new(home: PlaneRect) -> Self {
        Self {
            home,
            current: home,
            zoom_depth: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> PlaneRect {
        self.current
    }

    #[must_use]
    pub fn home(&self) -> PlaneRect {
        self.home
    }

    /// Zooms applied since the last reset.
    #[must_use]
    pub fn zoom_depth(&self) -> u32 {
        self.zoom_depth
    }

    /// Magnification relative to home along the real axis.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.home.width() / self.current.width()
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex::new(
            self.current.min_real() + self.current.width() / 2.0,
            self.current.min_imag() + self.current.height() / 2.0,
        )
    }

    /// On error the current viewport is left as it was.
    pub fn zoom_to_selection(
        &mut self,
        grid: GridSize,
        start: CanvasPoint,
        end: CanvasPoint,
    ) -> Result<PlaneRect, SelectionError> {
        let next = derive_viewport_from_selection(self.current, grid, start, end)?;

        self.current = next;
        self.zoom_depth = self.zoom_depth.saturating_add(1);

        Ok(next)
    }

    pub fn reset(&mut self) -> PlaneRect {
        self.current = self.home;
        self.zoom_depth = 0;

        self.current
    }
}

impl Default for ViewportNavigator {
    fn default() -> Self {
        Self::new(PlaneRect::DEFAULT)
    }
}
