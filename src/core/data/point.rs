/// A whole pixel on the grid, top-left origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// A position in canvas space as reported by pointer input.
///
/// Fractional, and free to fall on or past the grid edge (a drag released
/// at the border lands exactly on `width`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for CanvasPoint {
    fn from(point: Point) -> Self {
        Self {
            x: f64::from(point.x),
            y: f64::from(point.y),
        }
    }
}
