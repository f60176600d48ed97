use downhill_core::Observer;
use tracing::debug;

use crate::traits::{HasIteration, HasObjective};

/// Logs each event at debug level through `tracing`.
///
/// Never returns an action.
#[derive(Debug, Clone, Copy)]
pub struct Trace {
    every: usize,
}

impl Trace {
    /// Logs every event.
    #[must_use]
    pub fn new() -> Self {
        Self { every: 1 }
    }

    /// Logs only iterations that are a multiple of `every`.
    ///
    /// A value of zero is treated as one.
    #[must_use]
    pub fn every(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }

    fn should_log(&self, iter: usize) -> bool {
        iter % self.every == 0
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HasIteration + HasObjective, A> Observer<E, A> for Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        let iter = event.iteration();
        if self.should_log(iter) {
            debug!(iter, best = event.objective(), "iteration");
        }
        None
    }
}
