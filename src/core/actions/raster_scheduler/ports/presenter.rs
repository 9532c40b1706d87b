use crate::core::actions::raster_scheduler::events::render_event::RenderEvent;

pub trait RenderPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
