pub mod cancellation;
pub mod raster_scheduler;
pub mod render_slice;
