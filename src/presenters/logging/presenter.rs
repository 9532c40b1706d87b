use log::{debug, info};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::core::actions::raster_scheduler::events::render_event::RenderEvent;
use crate::core::actions::raster_scheduler::ports::presenter::RenderPresenterPort;
use crate::core::data::grid_size::GridSize;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::fractals::mandelbrot::controls::format_progress;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummary {
    pub generation: u64,
    pub grid: GridSize,
    pub render_duration: Duration,
    pub progress_reports: usize,
}

#[derive(Default)]
struct LogPresenterState {
    last_presented_generation: u64,
    progress_generation: u64,
    progress_reports: usize,
    frames: Vec<FrameSummary>,
    latest_frame: Option<PixelGrid>,
}

/// Headless presenter: logs progress and keeps the newest frame.
///
/// Frames older than the last one shown are dropped, so a late frame from a
/// superseded generation never replaces a newer picture.
#[derive(Default)]
pub struct LogPresenter {
    state: Mutex<LogPresenterState>,
}

impl LogPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames(&self) -> Vec<FrameSummary> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .frames
            .clone()
    }

    pub fn take_latest_frame(&self) -> Option<PixelGrid> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .latest_frame
            .take()
    }
}

impl RenderPresenterPort for LogPresenter {
    fn present(&self, event: RenderEvent) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        match event {
            RenderEvent::Progress {
                generation,
                percent,
            } => {
                if generation != state.progress_generation {
                    state.progress_generation = generation;
                    state.progress_reports = 0;
                }
                state.progress_reports += 1;
                debug!("generation {}: {}", generation, format_progress(percent));
            }
            RenderEvent::Frame(frame) => {
                if frame.generation <= state.last_presented_generation {
                    debug!(
                        "dropping stale frame {} (showing {})",
                        frame.generation, state.last_presented_generation
                    );
                    return;
                }

                let progress_reports = if state.progress_generation == frame.generation {
                    state.progress_reports
                } else {
                    0
                };
                let summary = FrameSummary {
                    generation: frame.generation,
                    grid: frame.pixel_grid.size(),
                    render_duration: frame.render_duration,
                    progress_reports,
                };

                info!(
                    "frame {}: {}x{} in {:?} after {} progress reports",
                    summary.generation,
                    summary.grid.width,
                    summary.grid.height,
                    summary.render_duration,
                    summary.progress_reports
                );

                state.last_presented_generation = frame.generation;
                state.frames.push(summary);
                state.latest_frame = Some(frame.pixel_grid);
            }
        }
    }
}
