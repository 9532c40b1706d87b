use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Shared "current epoch" counter. Advancing it orphans every job tagged with
/// an older generation; nothing else is needed to cancel.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    active: Arc<AtomicU64>,
}

impl GenerationCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints the next generation and makes it the active one.
    pub fn advance(&self) -> u64 {
        self.active.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[must_use]
    pub fn active(&self) -> u64 {
        self.active.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_active(&self, generation: u64) -> bool {
        self.active() == generation
    }

    #[must_use]
    pub fn token(&self, generation: u64) -> GenerationToken {
        GenerationToken {
            counter: self.clone(),
            generation,
        }
    }
}

/// Cancelled as soon as the counter moves past the generation it was made for.
#[derive(Debug, Clone)]
pub struct GenerationToken {
    counter: GenerationCounter,
    generation: u64,
}

impl GenerationToken {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl CancelToken for GenerationToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        !self.counter.is_active(self.generation)
    }
}
