use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::rgba::Rgba;
use std::error::Error;
use std::fmt;
use std::ops::Range;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelGridError {
    PixelOutsideGrid { pixel: Point, size: GridSize },
}

impl fmt::Display for PixelGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideGrid { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} grid",
                    pixel.x, pixel.y, size.width, size.height
                )
            }
        }
    }
}

impl Error for PixelGridError {}

/// Row-major RGBA pixel storage, four bytes per pixel, top-left origin.
///
/// A fresh grid is all zeroes, so any pixel still carrying alpha 0 was never
/// written.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    size: GridSize,
    bytes: Vec<u8>,
}

impl PixelGrid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            bytes: vec![0; size.pixel_count() * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn pixel(&self, pixel: Point) -> Result<Rgba, PixelGridError> {
        let offset = self.offset_of(pixel)?;
        let px = &self.bytes[offset..offset + BYTES_PER_PIXEL];

        Ok(Rgba {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Rgba) -> Result<(), PixelGridError> {
        let offset = self.offset_of(pixel)?;
        self.write_at(offset / BYTES_PER_PIXEL, colour);

        Ok(())
    }

    #[must_use]
    pub fn is_fully_opaque(&self) -> bool {
        self.bytes
            .chunks_exact(BYTES_PER_PIXEL)
            .all(|px| px[3] == u8::MAX)
    }

    /// Writes a pixel by linear index. Callers guarantee `index < pixel_count()`.
    pub(crate) fn write_at(&mut self, index: usize, colour: Rgba) {
        let offset = index * BYTES_PER_PIXEL;
        self.bytes[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&colour.to_bytes());
    }

    /// Bytes backing the pixel indices in `pixels`.
    pub(crate) fn span_mut(&mut self, pixels: Range<usize>) -> &mut [u8] {
        &mut self.bytes[pixels.start * BYTES_PER_PIXEL..pixels.end * BYTES_PER_PIXEL]
    }

    fn offset_of(&self, pixel: Point) -> Result<usize, PixelGridError> {
        if !self.size.contains(pixel) {
            return Err(PixelGridError::PixelOutsideGrid {
                pixel,
                size: self.size,
            });
        }

        Ok(self.size.index_of(pixel) * BYTES_PER_PIXEL)
    }
}
