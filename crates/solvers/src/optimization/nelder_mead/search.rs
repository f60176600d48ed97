use downhill_core::{Objective, Observer};
use tracing::{debug, trace};

use crate::optimization::evaluate::Evaluator;

use super::{
    Action, Config, Error, Event, Point, Solution, Status, rank::Ranks, simplex::Simplex,
    step::advance,
};

/// Core Nelder–Mead search implementation.
///
/// The `transform` function maps cached values back to the caller's sign
/// before they reach an observer or the solution, so maximization can run
/// on a negated objective and still report the original values.
pub(super) fn search<O, Obs, F>(
    objective: &O,
    seed: &[f64],
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
    F: Fn(f64) -> f64,
{
    if seed.is_empty() {
        return Err(Error::InvalidDimension);
    }

    let mut eval = Evaluator::new(objective, config.check_finite());
    let mut simplex = Simplex::new(seed, config.initial_step(), &mut eval)?;
    let mut ranks = Ranks::of(simplex.values());

    debug!(
        dimension = seed.len(),
        max_iters = config.max_iters(),
        initial = transform(simplex.value(ranks.best)),
        "starting nelder-mead search"
    );

    for iter in 1..=config.max_iters() {
        if let Some(tol) = config.value_tolerance() {
            let spread = simplex.value(ranks.worst) - simplex.value(ranks.best);
            if spread <= tol {
                let end = End::new(Status::Converged, iter - 1, eval.count());
                return Ok(end.finish(simplex, ranks, &transform));
            }
        }

        let step = advance(&mut simplex, ranks, config.coefficients(), &mut eval)?;
        ranks = Ranks::of(simplex.values());

        let best = Point::new(
            simplex.vertex(ranks.best),
            transform(simplex.value(ranks.best)),
        );
        trace!(iter, ?step, best = best.objective, "nelder-mead step");

        let event = Event {
            iter,
            step,
            best,
            worst_objective: transform(simplex.value(ranks.worst)),
            evaluations: eval.count(),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            let end = End::new(Status::StoppedByObserver, iter, eval.count());
            return Ok(end.finish(simplex, ranks, &transform));
        }
    }

    let end = End::new(Status::Complete, config.max_iters(), eval.count());
    Ok(end.finish(simplex, ranks, &transform))
}

/// How and when a search ended.
struct End {
    status: Status,
    iters: usize,
    evaluations: usize,
}

impl End {
    fn new(status: Status, iters: usize, evaluations: usize) -> Self {
        Self {
            status,
            iters,
            evaluations,
        }
    }

    /// Extracts the best vertex as the solution.
    fn finish(self, simplex: Simplex, ranks: Ranks, transform: impl Fn(f64) -> f64) -> Solution {
        let (x, value) = simplex.into_vertex(ranks.best);
        let objective = transform(value);

        debug!(
            status = ?self.status,
            iters = self.iters,
            evaluations = self.evaluations,
            objective,
            "nelder-mead search finished"
        );

        Solution {
            status: self.status,
            x,
            objective,
            iters: self.iters,
            evaluations: self.evaluations,
        }
    }
}
