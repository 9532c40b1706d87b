use log::{debug, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use crate::core::actions::cancellation::GenerationCounter;
use crate::core::actions::raster_scheduler::ports::presenter::RenderPresenterPort;
use crate::core::actions::raster_scheduler::raster_scheduler::{RasterScheduler, StepOutcome};
use crate::core::actions::raster_scheduler::scheduler_config::SchedulerConfig;
use crate::core::actions::render_slice::ports::colour_policy::ColourPolicy;
use crate::core::data::job_history::JobHistory;
use crate::core::data::render_job::{ConfigurationError, JobState, RenderJob, RenderRequest};

struct SharedState {
    generations: GenerationCounter,
    history: JobHistory,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<RenderJob>>,
    wake: Condvar,
    shutdown: AtomicBool,
}

/// Hosts a [`RasterScheduler`] on a worker thread.
///
/// Submitting never blocks on rendering. The worker runs one slice at a time
/// and looks for a newer request between slices; a newer request has already
/// orphaned the old job by the time the worker sees it.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        config: SchedulerConfig,
        colour_policy: Box<dyn ColourPolicy>,
        presenter_port: Arc<dyn RenderPresenterPort>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generations: GenerationCounter::new(),
            history: JobHistory::new(),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
        });

        let scheduler = RasterScheduler::new(config, colour_policy, presenter_port)
            .sharing(shared.generations.clone(), shared.history.clone());
        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, scheduler);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Validates `request` on the caller's thread and queues it, superseding
    /// both the job in flight and any request not yet picked up.
    pub fn submit_request(&self, request: RenderRequest) -> Result<u64, ConfigurationError> {
        if let Err(err) = request.validate() {
            warn!("render request rejected: {}", err);
            return Err(err);
        }

        let generation = self.shared.generations.advance();
        let job = RenderJob::new(request, generation)?;
        self.shared.history.record(generation, JobState::Pending);

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(replaced) = guard.replace(job) {
                self.shared
                    .history
                    .record(replaced.generation, JobState::Cancelled);
            }
        }

        self.shared.wake.notify_one();

        Ok(generation)
    }

    /// Orphans the job in flight and drops any queued request.
    pub fn cancel(&self) {
        self.shared.generations.advance();

        let queued = self
            .shared
            .latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(job) = queued {
            self.shared.history.record(job.generation, JobState::Cancelled);
        }

        self.shared.wake.notify_one();
    }

    pub fn shutdown(&mut self) {
        {
            // Under the lock, so the worker cannot miss the flag between its
            // check and `wait`.
            let _guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    #[must_use]
    pub fn active_generation(&self) -> u64 {
        self.shared.generations.active()
    }

    #[must_use]
    pub fn job_state(&self, generation: u64) -> Option<JobState> {
        self.shared.history.state_of(generation)
    }

    fn worker_loop(shared: &Arc<SharedState>, mut scheduler: RasterScheduler) {
        loop {
            let next_job = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        debug!("render worker shutting down");
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break Some(job);
                    }

                    // Keep slicing the current job; only sleep when idle.
                    if scheduler.is_rendering() {
                        break None;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            if let Some(job) = next_job {
                scheduler.start_job(job);
            }

            if let StepOutcome::Completed { generation } = scheduler.step() {
                shared
                    .last_completed_generation
                    .fetch_max(generation, Ordering::AcqRel);
            }
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
