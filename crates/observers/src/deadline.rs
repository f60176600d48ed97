use std::time::{Duration, Instant};

use downhill_core::Observer;

use crate::traits::CanStopEarly;

/// Stops the solver once a wall-clock budget has elapsed.
///
/// The clock starts when the observer is created. The check runs between
/// iterations, so an objective that blocks can overrun the budget by the
/// length of one iteration.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires: Instant,
}

impl Deadline {
    /// Creates a deadline `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self::at(Instant::now() + budget)
    }

    /// Creates a deadline at a fixed instant.
    #[must_use]
    pub fn at(expires: Instant) -> Self {
        Self { expires }
    }

    /// Returns whether the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_expired().then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use downhill_core::Pure;
    use downhill_solvers::optimization::nelder_mead::{Config, Status, minimize};

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }

    #[test]
    fn expired_deadline_stops_after_the_first_iteration() {
        let deadline = Deadline::at(Instant::now());

        let solution =
            minimize(&Pure(sphere), &[1.0, 2.0], &Config::default(), deadline).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
    }

    #[test]
    fn distant_deadline_lets_the_run_complete() {
        let deadline = Deadline::after(Duration::from_secs(3600));

        let solution = minimize(&Pure(sphere), &[1.0, 2.0], &Config::new(50), deadline).unwrap();

        assert!(!deadline.is_expired());
        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.iters, 50);
    }
}
