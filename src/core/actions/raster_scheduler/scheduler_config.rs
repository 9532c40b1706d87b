use crate::core::actions::render_slice::render_slice::SliceExecution;
use std::num::NonZeroUsize;

pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(2000) {
    Some(size) => size,
    None => unreachable!(),
};

/// Tunables for the slice loop. Neither affects the finished frame, only how
/// often the host regains control and how many progress reports it sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Pixels evaluated per slice.
    pub chunk_size: NonZeroUsize,
    pub execution: SliceExecution,
}

impl SchedulerConfig {
    #[must_use]
    pub const fn new(chunk_size: NonZeroUsize, execution: SliceExecution) -> Self {
        Self {
            chunk_size,
            execution,
        }
    }

    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: NonZeroUsize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    #[must_use]
    pub const fn with_execution(mut self, execution: SliceExecution) -> Self {
        self.execution = execution;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, SliceExecution::Sequential)
    }
}
