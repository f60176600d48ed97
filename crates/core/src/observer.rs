/// Observes solver events and optionally returns control actions.
///
/// Solvers call [`Observer::observe`] at well-defined points during a run.
/// Returning `None` lets the solver continue unchanged; returning an action
/// asks the solver to react (for example, to stop early).
///
/// The event and action types are solver-specific.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
