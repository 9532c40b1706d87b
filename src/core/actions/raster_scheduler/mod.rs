pub mod events;
pub mod ports;
pub mod raster_scheduler;
pub mod scheduler_config;
