pub mod controllers;
pub mod core;
pub mod presenters;

pub use crate::controllers::interactive::InteractiveController;
pub use crate::core::actions::raster_scheduler::events::render_event::RenderEvent;
pub use crate::core::actions::raster_scheduler::ports::presenter::RenderPresenterPort;
pub use crate::core::actions::raster_scheduler::raster_scheduler::{RasterScheduler, StepOutcome};
pub use crate::core::actions::raster_scheduler::scheduler_config::SchedulerConfig;
pub use crate::core::actions::render_slice::render_slice::SliceExecution;
pub use crate::core::colour_policies::factory::colour_policy_factory;
pub use crate::core::colour_policies::kinds::ColourPolicyKind;
pub use crate::core::data::grid_size::GridSize;
pub use crate::core::data::plane_rect::PlaneRect;
pub use crate::core::data::point::CanvasPoint;
pub use crate::core::data::render_job::{ConfigurationError, JobState, RenderRequest};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::navigation::selection_drag::SelectionDrag;
pub use crate::core::navigation::viewport_navigator::ViewportNavigator;
pub use crate::presenters::logging::presenter::LogPresenter;
