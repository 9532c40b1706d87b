use crate::core::data::render_job::JobState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

pub const JOB_HISTORY_LIMIT: usize = 64;

/// Outcomes of the most recent jobs, keyed by generation.
///
/// Clones share the same record, so a controller and the scheduler running on
/// its worker thread see one history. Only the newest `JOB_HISTORY_LIMIT`
/// generations are kept.
#[derive(Debug, Clone, Default)]
pub struct JobHistory {
    entries: Arc<Mutex<VecDeque<(u64, JobState)>>>,
}

impl JobHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `generation` to `state`. Terminal states are final: returns
    /// `false` and leaves the entry untouched if the job already finished.
    pub fn record(&self, generation: u64, state: JobState) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some((_, existing)) = entries.iter_mut().rev().find(|(g, _)| *g == generation) {
            if existing.is_terminal() {
                return false;
            }
            *existing = state;
            return true;
        }

        entries.push_back((generation, state));
        while entries.len() > JOB_HISTORY_LIMIT {
            entries.pop_front();
        }

        true
    }

    #[must_use]
    pub fn state_of(&self, generation: u64) -> Option<JobState> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|(g, _)| *g == generation)
            .map(|(_, state)| *state)
    }
}
