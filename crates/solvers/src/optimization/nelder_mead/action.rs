/// Actions an observer can take during a Nelder–Mead search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best vertex found so far.
    StopEarly,
}
