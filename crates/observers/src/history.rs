use downhill_core::Observer;

use crate::traits::HasObjective;

/// Records the best objective value reported by each event.
///
/// Pass `&mut History` to a solver to keep the recording after the run.
#[derive(Debug, Clone, Default)]
pub struct History {
    values: Vec<f64>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded values in event order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the most recent value, if any event was observed.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns whether no recorded value exceeds the one before it.
    #[must_use]
    pub fn is_non_increasing(&self) -> bool {
        self.values.windows(2).all(|w| w[1] <= w[0])
    }
}

impl<E: HasObjective, A> Observer<E, A> for History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.values.push(event.objective());
        None
    }
}

impl<E: HasObjective, A> Observer<E, A> for &mut History {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
