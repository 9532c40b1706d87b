pub mod complex;
pub mod frame_data;
pub mod grid_size;
pub mod job_history;
pub mod pixel_grid;
pub mod plane_rect;
pub mod point;
pub mod render_job;
pub mod rgba;
