use log::{debug, trace};
use std::sync::Arc;
use std::time::Instant;

use crate::core::actions::cancellation::{CancelToken, GenerationCounter, GenerationToken};
use crate::core::actions::raster_scheduler::events::render_event::RenderEvent;
use crate::core::actions::raster_scheduler::ports::presenter::RenderPresenterPort;
use crate::core::actions::raster_scheduler::scheduler_config::SchedulerConfig;
use crate::core::actions::render_slice::ports::colour_policy::ColourPolicy;
use crate::core::actions::render_slice::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::render_slice::render_slice::{SliceContext, render_slice};
use crate::core::data::frame_data::FrameData;
use crate::core::data::job_history::JobHistory;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::render_job::{ConfigurationError, JobState, RenderJob, RenderRequest};
use crate::core::fractals::mandelbrot::algorithm::Mandelbrot;
use crate::core::util::pixel_to_plane_coords::PlaneMapping;

/// What a single call to [`RasterScheduler::step`] did.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StepOutcome {
    /// No job was held.
    Idle,
    /// A slice was written and more remain.
    Running { generation: u64, progress: f64 },
    /// The last slice was written and the frame handed to the presenter.
    Completed { generation: u64 },
    /// The job had been superseded and was dropped without reporting.
    Cancelled { generation: u64 },
}

struct ActiveJob {
    job: RenderJob,
    token: GenerationToken,
    // `None` for an empty grid, which has nothing to map.
    mapping: Option<PlaneMapping>,
    grid: PixelGrid,
    next_index: usize,
    bounded: usize,
    started: Instant,
}

/// Drives one job at a time across its pixel grid in fixed-size slices.
///
/// The host decides when slices run: each [`step`](Self::step) evaluates one
/// slice and returns, so control comes back between slices. Starting a new
/// job advances the generation counter, which orphans whatever was in flight;
/// the orphan is noticed at the top of its next slice and dropped without a
/// frame.
pub struct RasterScheduler<A: EscapeTimeAlgorithm = Mandelbrot> {
    config: SchedulerConfig,
    algorithm: A,
    colour_policy: Box<dyn ColourPolicy>,
    presenter_port: Arc<dyn RenderPresenterPort>,
    generations: GenerationCounter,
    history: JobHistory,
    active: Option<ActiveJob>,
    last_completed_generation: u64,
    progress: f64,
}

impl RasterScheduler<Mandelbrot> {
    pub fn new(
        config: SchedulerConfig,
        colour_policy: Box<dyn ColourPolicy>,
        presenter_port: Arc<dyn RenderPresenterPort>,
    ) -> Self {
        Self::with_algorithm(Mandelbrot, config, colour_policy, presenter_port)
    }
}

impl<A: EscapeTimeAlgorithm> RasterScheduler<A> {
    pub fn with_algorithm(
        algorithm: A,
        config: SchedulerConfig,
        colour_policy: Box<dyn ColourPolicy>,
        presenter_port: Arc<dyn RenderPresenterPort>,
    ) -> Self {
        Self {
            config,
            algorithm,
            colour_policy,
            presenter_port,
            generations: GenerationCounter::new(),
            history: JobHistory::new(),
            active: None,
            last_completed_generation: 0,
            progress: 0.0,
        }
    }

    /// Shares a generation counter and job history with another owner, so
    /// generations minted elsewhere supersede this scheduler's jobs.
    #[must_use]
    pub fn sharing(mut self, generations: GenerationCounter, history: JobHistory) -> Self {
        self.generations = generations;
        self.history = history;
        self
    }

    /// Validates `request`, supersedes any job in flight and makes the new job
    /// the active one. Returns its generation.
    ///
    /// An invalid request leaves the scheduler untouched and consumes no
    /// generation.
    pub fn start_render(&mut self, request: RenderRequest) -> Result<u64, ConfigurationError> {
        request.validate()?;

        let generation = self.generations.advance();
        self.start_job(RenderJob::new(request, generation)?);

        Ok(generation)
    }

    /// Takes over a job whose generation was minted on the shared counter.
    /// A job that is already stale is recorded as cancelled and never runs.
    pub(crate) fn start_job(&mut self, job: RenderJob) {
        self.retire_active();

        if !self.generations.is_active(job.generation) {
            debug!("generation {} superseded before it started", job.generation);
            self.history.record(job.generation, JobState::Cancelled);
            return;
        }

        debug!(
            "starting generation {}: {}x{} grid, iteration cap {}, viewport {:?}",
            job.generation, job.grid.width, job.grid.height, job.iteration_cap, job.viewport
        );

        self.history.record(job.generation, JobState::Running);
        self.progress = 0.0;
        self.active = Some(ActiveJob {
            token: self.generations.token(job.generation),
            mapping: PlaneMapping::new(job.viewport, job.grid).ok(),
            grid: PixelGrid::new(job.grid),
            next_index: 0,
            bounded: 0,
            started: Instant::now(),
            job,
        });
    }

    /// Evaluates the next slice of the active job.
    pub fn step(&mut self) -> StepOutcome {
        let Some(mut active) = self.active.take() else {
            return StepOutcome::Idle;
        };
        let generation = active.job.generation;

        if active.token.is_cancelled() {
            return self.abandon(active);
        }

        let total = active.job.total_pixels();
        let start = active.next_index;
        let end = start.saturating_add(self.config.chunk_size.get()).min(total);

        if let Some(mapping) = &active.mapping {
            let context = SliceContext {
                mapping,
                iteration_cap: active.job.iteration_cap,
                algorithm: &self.algorithm,
                colour_policy: self.colour_policy.as_ref(),
            };
            active.bounded +=
                render_slice(&mut active.grid, start..end, &context, self.config.execution);
        }
        active.next_index = end;

        // The slice itself is not preemptible, so a job orphaned while it ran
        // is only caught here.
        if active.token.is_cancelled() {
            return self.abandon(active);
        }

        let progress = progress_percent(end, total);
        self.progress = progress;
        trace!(
            "generation {}: pixels {}..{} of {} ({:.1}%)",
            generation, start, end, total, progress
        );
        self.presenter_port.present(RenderEvent::Progress {
            generation,
            percent: progress,
        });

        if end < total {
            self.active = Some(active);
            return StepOutcome::Running {
                generation,
                progress,
            };
        }

        self.commit(active)
    }

    /// Steps until the active job completes or is cancelled.
    pub fn run_to_completion(&mut self) -> StepOutcome {
        loop {
            match self.step() {
                StepOutcome::Running { .. } => continue,
                outcome => return outcome,
            }
        }
    }

    /// Orphans the active job without starting another. Returns the newly
    /// active generation, which no job owns.
    pub fn cancel(&mut self) -> u64 {
        let generation = self.generations.advance();
        self.retire_active();

        generation
    }

    /// Whether a job is held. A job orphaned from another thread still counts
    /// until the next `step` drops it.
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active_generation(&self) -> u64 {
        self.generations.active()
    }

    /// Zero until a job completes.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.last_completed_generation
    }

    #[must_use]
    pub fn job_state(&self, generation: u64) -> Option<JobState> {
        self.history.state_of(generation)
    }

    /// Last reported progress of the current (or most recent) job.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn config(&self) -> SchedulerConfig {
        self.config
    }

    fn retire_active(&mut self) {
        if let Some(active) = self.active.take() {
            debug!(
                "generation {} superseded at pixel {} of {}",
                active.job.generation,
                active.next_index,
                active.job.total_pixels()
            );
            self.history.record(active.job.generation, JobState::Cancelled);
        }
    }

    fn abandon(&mut self, active: ActiveJob) -> StepOutcome {
        let generation = active.job.generation;
        debug!(
            "generation {} dropped at pixel {} of {}",
            generation,
            active.next_index,
            active.job.total_pixels()
        );
        self.history.record(generation, JobState::Cancelled);

        StepOutcome::Cancelled { generation }
    }

    fn commit(&mut self, active: ActiveJob) -> StepOutcome {
        let generation = active.job.generation;
        let render_duration = active.started.elapsed();

        debug!(
            "generation {} completed in {:?}: {} of {} pixels bounded",
            generation,
            render_duration,
            active.bounded,
            active.job.total_pixels()
        );

        self.history.record(generation, JobState::Completed);
        self.last_completed_generation = generation;
        self.presenter_port.present(RenderEvent::Frame(FrameData {
            generation,
            pixel_grid: active.grid,
            render_duration,
        }));

        StepOutcome::Completed { generation }
    }
}

fn progress_percent(end: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }

    end as f64 / total as f64 * 100.0
}
