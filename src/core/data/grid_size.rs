use crate::core::data::point::Point;

/// Logical pixel dimensions of a render.
///
/// Width and height are independent and either may be zero; a zero-area grid
/// is a valid "nothing to render" state rather than an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major position of a linear pixel index.
    ///
    /// Only meaningful for `index < pixel_count()`.
    #[must_use]
    pub fn point_at(&self, index: usize) -> Point {
        let width = self.width as usize;

        Point {
            x: (index % width) as u32,
            y: (index / width) as u32,
        }
    }

    #[must_use]
    pub fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_count() {
        assert_eq!(GridSize::new(121, 101).pixel_count(), 12221);
        assert_eq!(GridSize::square(500).pixel_count(), 250_000);
    }

    #[test]
    fn test_zero_width_or_height_is_empty() {
        assert!(GridSize::new(0, 10).is_empty());
        assert!(GridSize::new(10, 0).is_empty());
        assert_eq!(GridSize::new(0, 10).pixel_count(), 0);
        assert!(!GridSize::new(1, 1).is_empty());
    }

    #[test]
    fn test_contains_point() {
        let grid = GridSize::new(4, 3);

        assert!(grid.contains(Point { x: 0, y: 0 }));
        assert!(grid.contains(Point { x: 3, y: 2 }));
        assert!(!grid.contains(Point { x: 4, y: 0 }));
        assert!(!grid.contains(Point { x: 0, y: 3 }));
    }

    #[test]
    fn test_point_at_is_row_major() {
        let grid = GridSize::new(3, 2);

        assert_eq!(grid.point_at(0), Point { x: 0, y: 0 });
        assert_eq!(grid.point_at(2), Point { x: 2, y: 0 });
        assert_eq!(grid.point_at(3), Point { x: 0, y: 1 });
        assert_eq!(grid.point_at(5), Point { x: 2, y: 1 });
    }

    #[test]
    fn test_index_of_inverts_point_at() {
        let grid = GridSize::new(7, 5);

        for index in 0..grid.pixel_count() {
            assert_eq!(grid.index_of(grid.point_at(index)), index);
        }
    }
}
