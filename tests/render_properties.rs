use mandelbrot_explorer::core::actions::render_slice::ports::escape_time_algorithm::Escape;
use mandelbrot_explorer::core::data::complex::Complex;
use mandelbrot_explorer::core::data::point::Point;
use mandelbrot_explorer::core::fractals::mandelbrot::algorithm::classify;
use mandelbrot_explorer::core::util::derive_viewport_from_selection::derive_viewport_from_selection;
use mandelbrot_explorer::core::util::pixel_to_plane_coords::PlaneMapping;
use mandelbrot_explorer::{
    CanvasPoint, ColourPolicyKind, GridSize, PlaneRect, RasterScheduler, RenderEvent,
    RenderPresenterPort, RenderRequest, SchedulerConfig, StepOutcome, ViewportNavigator,
    colour_policy_factory,
};
use proptest::prelude::*;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct CollectingPresenter {
    events: Mutex<Vec<RenderEvent>>,
}

impl CollectingPresenter {
    fn take_events(&self) -> Vec<RenderEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl RenderPresenterPort for CollectingPresenter {
    fn present(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn scheduler(chunk_size: usize) -> (RasterScheduler, Arc<CollectingPresenter>) {
    let presenter = Arc::new(CollectingPresenter::default());
    let scheduler = RasterScheduler::new(
        SchedulerConfig::default().with_chunk_size(NonZeroUsize::new(chunk_size).unwrap()),
        colour_policy_factory(ColourPolicyKind::TwoTone),
        Arc::clone(&presenter) as Arc<dyn RenderPresenterPort>,
    );

    (scheduler, presenter)
}

fn progress_of(events: &[RenderEvent], generation: u64) -> Vec<f64> {
    events
        .iter()
        .filter_map(|e| match e {
            RenderEvent::Progress {
                generation: g,
                percent,
            } if *g == generation => Some(*percent),
            _ => None,
        })
        .collect()
}

fn frame_generations(events: &[RenderEvent]) -> Vec<u64> {
    events
        .iter()
        .filter_map(|e| match e {
            RenderEvent::Frame(frame) => Some(frame.generation),
            RenderEvent::Progress { .. } => None,
        })
        .collect()
}

fn arb_viewport() -> impl Strategy<Value = PlaneRect> {
    (-10.0f64..10.0, 1e-3f64..10.0, -10.0f64..10.0, 1e-3f64..10.0).prop_map(
        |(min_real, width, min_imag, height)| {
            PlaneRect::new(min_real, min_real + width, min_imag, min_imag + height).unwrap()
        },
    )
}

fn arb_canvas_point(side: u32) -> impl Strategy<Value = CanvasPoint> {
    (0..=side, 0..=side).prop_map(|(x, y)| CanvasPoint::new(f64::from(x), f64::from(y)))
}

#[test]
fn test_known_points_classify_as_expected() {
    for cap in [1, 2, 10, 100, 1000] {
        assert_eq!(classify(Complex::ZERO, cap), Escape::Bounded);
    }
    assert!(!classify(Complex::new(3.0, 0.0), 10).is_bounded());
    assert!(!classify(Complex::new(2.0, 2.0), 10).is_bounded());
    assert!(classify(Complex::new(-1.0, 0.0), 50).is_bounded());
}

proptest! {
    #[test]
    fn test_classification_is_deterministic(
        real in -2.5f64..1.5,
        imag in -1.5f64..1.5,
        cap in 1u32..500,
    ) {
        let c = Complex::new(real, imag);
        prop_assert_eq!(classify(c, cap), classify(c, cap));
    }

    #[test]
    fn test_escape_iteration_stays_below_cap(
        real in -4.0f64..4.0,
        imag in -4.0f64..4.0,
        cap in 1u32..200,
    ) {
        if let Escape::Unbounded { iterations } = classify(Complex::new(real, imag), cap) {
            prop_assert!(iterations < cap);
        }
    }

    #[test]
    fn test_pixel_to_plane_round_trips(
        viewport in arb_viewport(),
        width in 1u32..128,
        height in 1u32..128,
        x_frac in 0.0f64..1.0,
        y_frac in 0.0f64..1.0,
    ) {
        let grid = GridSize::new(width, height);
        let mapping = PlaneMapping::new(viewport, grid).unwrap();
        let point = Point {
            x: ((f64::from(width) * x_frac) as u32).min(width - 1),
            y: ((f64::from(height) * y_frac) as u32).min(height - 1),
        };

        let c = mapping.pixel_to_plane(point).unwrap();
        let back = mapping.plane_to_canvas(c);

        prop_assert!((back.x - f64::from(point.x)).abs() < 1e-6);
        prop_assert!((back.y - f64::from(point.y)).abs() < 1e-6);
    }

    #[test]
    fn test_selection_is_normalized_whatever_the_drag_direction(
        viewport in arb_viewport(),
        a in arb_canvas_point(400),
        b in arb_canvas_point(400),
    ) {
        let grid = GridSize::square(400);
        let swapped_a = CanvasPoint::new(a.x, b.y);
        let swapped_b = CanvasPoint::new(b.x, a.y);

        let forward = derive_viewport_from_selection(viewport, grid, a, b).ok();
        let backward = derive_viewport_from_selection(viewport, grid, b, a).ok();
        let crossed = derive_viewport_from_selection(viewport, grid, swapped_a, swapped_b).ok();

        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, crossed);
        if let Some(rect) = forward {
            prop_assert!(rect.min_real() < rect.max_real());
            prop_assert!(rect.min_imag() < rect.max_imag());
        }
    }

    #[test]
    fn test_reset_restores_default_after_any_zooms(
        drags in proptest::collection::vec((arb_canvas_point(500), arb_canvas_point(500)), 0..8),
    ) {
        let grid = GridSize::square(500);
        let mut navigator = ViewportNavigator::default();

        for (start, end) in drags {
            let _ = navigator.zoom_to_selection(grid, start, end);
        }

        prop_assert_eq!(navigator.reset(), PlaneRect::DEFAULT);
        prop_assert_eq!(navigator.zoom_depth(), 0);
    }

    #[test]
    fn test_progress_is_monotone_and_frame_is_emitted_once(
        width in 0u32..24,
        height in 0u32..24,
        chunk_size in 1usize..100,
    ) {
        let (mut scheduler, presenter) = scheduler(chunk_size);
        let grid = GridSize::new(width, height);
        let generation = scheduler
            .start_render(RenderRequest::new(PlaneRect::DEFAULT, 30, grid))
            .unwrap();

        prop_assert_eq!(scheduler.run_to_completion(), StepOutcome::Completed { generation });

        let events = presenter.take_events();
        let progress = progress_of(&events, generation);
        let total = grid.pixel_count();
        let expected_reports = total.div_ceil(chunk_size).max(1);

        prop_assert_eq!(progress.len(), expected_reports);
        prop_assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(progress.last().copied(), Some(100.0));
        prop_assert_eq!(frame_generations(&events), vec![generation]);

        let frame = events.into_iter().find_map(|e| match e {
            RenderEvent::Frame(frame) => Some(frame),
            RenderEvent::Progress { .. } => None,
        });
        let frame = frame.unwrap();
        prop_assert_eq!(frame.pixel_grid.bytes().len(), total * 4);
        prop_assert!(frame.pixel_grid.is_fully_opaque());
    }

    #[test]
    fn test_superseded_job_is_silent(
        side in 4u32..24,
        chunk_size in 1usize..16,
        cut in 0.0f64..1.0,
    ) {
        let (mut scheduler, presenter) = scheduler(chunk_size);
        let grid = GridSize::square(side);
        let slices = grid.pixel_count().div_ceil(chunk_size);
        let steps_before_cut = ((slices - 1) as f64 * cut) as usize;

        let first = scheduler
            .start_render(RenderRequest::new(PlaneRect::DEFAULT, 30, grid))
            .unwrap();
        for _ in 0..steps_before_cut {
            scheduler.step();
        }
        let second = scheduler
            .start_render(RenderRequest::new(PlaneRect::DEFAULT, 30, grid))
            .unwrap();
        scheduler.run_to_completion();

        let events = presenter.take_events();
        prop_assert_eq!(frame_generations(&events), vec![second]);
        prop_assert!(!progress_of(&events, first).contains(&100.0));
        prop_assert_eq!(progress_of(&events, second).last().copied(), Some(100.0));
    }
}
