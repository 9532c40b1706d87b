use crate::core::data::frame_data::FrameData;

#[derive(Debug)]
pub enum RenderEvent {
    /// Emitted after every slice. `percent` never decreases within one
    /// generation and the last report of a completed job is exactly 100.
    Progress { generation: u64, percent: f64 },
    /// Emitted once per completed job, never for a cancelled one.
    Frame(FrameData),
}
