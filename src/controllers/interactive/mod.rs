//! Interactive controller for incremental Mandelbrot rendering.
//!
//! Follows the ports & adapters pattern:
//! - **Input**: `RenderRequest` snapshots submitted from the UI thread
//! - **Output**: `RenderPresenterPort` receiving progress and frame events
//! - **Core**: the `RasterScheduler` from `core/`, driven on a worker thread

mod controller;

pub use controller::InteractiveController;
