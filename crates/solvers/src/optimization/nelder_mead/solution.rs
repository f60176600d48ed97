/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran the full iteration budget.
    Complete,

    /// The spread of objective values fell within the configured tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Nelder–Mead search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The best vertex of the final simplex.
    pub x: Vec<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Number of completed iterations.
    pub iters: usize,

    /// Number of objective evaluations, including the initial simplex.
    pub evaluations: usize,
}
