use crate::core::data::pixel_grid::PixelGrid;
use std::time::Duration;

/// A finished job's buffer, handed over to whoever displays it.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_grid: PixelGrid,
    pub render_duration: Duration,
}
