use log::info;
use std::sync::Arc;

use mandelbrot_explorer::core::fractals::mandelbrot::controls::{
    ITERATION_CAP_RANGE, RESOLUTION_RANGE,
};
use mandelbrot_explorer::{
    CanvasPoint, GridSize, LogPresenter, MandelbrotConfig, RasterScheduler, RenderPresenterPort,
    SchedulerConfig, SelectionDrag, ViewportNavigator, colour_policy_factory,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A second init (e.g. from the test below) is harmless.
    let _ = env_logger::try_init();

    let mut config = MandelbrotConfig::default();
    config.iteration_cap = ITERATION_CAP_RANGE.clamp(config.iteration_cap);
    config.grid = GridSize::square(RESOLUTION_RANGE.clamp(config.grid.width));
    let presenter = Arc::new(LogPresenter::new());
    let mut scheduler = RasterScheduler::new(
        SchedulerConfig::default(),
        colour_policy_factory(config.colour_policy),
        Arc::clone(&presenter) as Arc<dyn RenderPresenterPort>,
    );
    let mut navigator = ViewportNavigator::new(config.region);

    scheduler.start_render(config.build_render_request())?;
    scheduler.run_to_completion();

    // Drag over the middle of the upper-left quadrant.
    let width = f64::from(config.grid.width);
    let height = f64::from(config.grid.height);
    let mut drag = SelectionDrag::new();
    drag.begin(
        CanvasPoint::new(width * 0.25, height * 0.25),
        scheduler.is_rendering(),
    );
    drag.update(CanvasPoint::new(width * 0.5, height * 0.5));
    if let Some((start, end)) = drag.finish() {
        config.region = navigator.zoom_to_selection(config.grid, start, end)?;
    }
    info!(
        "zoomed {:.1}x around {:?}",
        navigator.zoom_factor(),
        navigator.centre()
    );
    scheduler.start_render(config.build_render_request())?;
    scheduler.run_to_completion();

    config.region = navigator.reset();
    scheduler.start_render(config.build_render_request())?;
    scheduler.run_to_completion();

    if let Some(latest) = presenter.take_latest_frame() {
        info!("latest frame holds {} bytes", latest.bytes().len());
    }
    for frame in presenter.frames() {
        info!(
            "generation {}: {}x{} rendered in {:?}",
            frame.generation, frame.grid.width, frame.grid.height, frame.render_duration
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
