use super::{Point, Step};

/// Event emitted by the Nelder–Mead solver after each iteration.
///
/// The simplex has already been updated and re-ranked when the event is
/// emitted, so `best` is the vertex the solver would return if it stopped now.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The iteration number, starting at 1.
    pub iter: usize,

    /// The move the iteration made.
    pub step: Step,

    /// The current best vertex.
    pub best: Point<'a>,

    /// The objective value at the current worst vertex.
    pub worst_objective: f64,

    /// Objective evaluations performed so far, including the initial simplex.
    pub evaluations: usize,
}

impl Event<'_> {
    /// Returns the spread between the worst and best objective values.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.worst_objective - self.best.objective
    }
}
