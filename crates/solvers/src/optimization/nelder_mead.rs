//! Nelder–Mead simplex search for multi-variable optimization.
//!
//! # Algorithm
//!
//! The solver keeps a simplex of `d + 1` vertices in `d` dimensions, each
//! paired with its objective value. Every iteration replaces the worst
//! vertex by reflecting it through the centroid of the others, then
//! expanding, contracting, or (as a last resort) shrinking the whole simplex
//! toward the best vertex.
//!
//! The initial simplex is the seed plus one vertex per coordinate, each
//! perturbing a single coordinate as described by [`InitialStep`].
//!
//! # When to Use
//!
//! Nelder–Mead is appropriate when:
//! - Derivatives are unavailable, noisy, or expensive
//! - The problem has a modest number of variables
//! - Function evaluations are cheap enough to spend thousands of them
//!
//! # Limitations
//!
//! - **No convergence guarantee**: the simplex can stall on non-smooth or
//!   badly scaled objectives
//! - **Local search**: the result depends on the seed
//! - **Fixed budget by default**: the solver runs [`Config::max_iters`]
//!   iterations unless a value tolerance is configured or an observer stops it
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every iteration, once the simplex has
//! been updated and re-ranked. Observers can return [`Action::StopEarly`] to
//! halt and return the current best vertex.

mod action;
mod config;
mod error;
mod event;
mod point;
mod rank;
mod search;
mod simplex;
mod solution;
mod step;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Coefficients, Config, ConfigError, InitialStep};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};
pub use step::Step;

use downhill_core::{Negate, Objective, Observer};

use search::search;

/// Finds a minimum of the objective starting from `seed`.
///
/// The dimension of the problem is `seed.len()`. The observer receives an
/// [`Event`] after each iteration.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if `seed` is empty, or an error if the
/// objective fails (or returns a non-finite value while
/// [`Config::check_finite`] is enabled).
pub fn minimize<O, Obs>(
    objective: &O,
    seed: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(objective, seed, config, observer, |v| v)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<O: Objective>(
    objective: &O,
    seed: &[f64],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, seed, config, ())
}

/// Finds a maximum of the objective starting from `seed`.
///
/// Minimizes the negated objective. Event and solution values are reported
/// in the objective's own sign.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize<O, Obs>(
    objective: &O,
    seed: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(&Negate(objective), seed, config, observer, |v| -v)
}

/// Finds a maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize_unobserved<O: Objective>(
    objective: &O,
    seed: &[f64],
    config: &Config,
) -> Result<Solution, Error> {
    maximize(objective, seed, config, ())
}

/// Runs exactly `iters` iterations from `seed` with the reference
/// coefficients and returns the best vertex and its value.
///
/// With `iters == 0` the result is the best vertex of the initial simplex.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if `dimension` is zero,
/// [`Error::DimensionMismatch`] if `seed` does not have `dimension`
/// coordinates, or [`Error::Objective`] if an evaluation fails.
pub fn optimize<O: Objective>(
    dimension: usize,
    seed: &[f64],
    objective: &O,
    iters: usize,
) -> Result<(Vec<f64>, f64), Error> {
    if dimension == 0 {
        return Err(Error::InvalidDimension);
    }
    if seed.len() != dimension {
        return Err(Error::DimensionMismatch {
            expected: dimension,
            actual: seed.len(),
        });
    }

    let solution = minimize_unobserved(objective, seed, &Config::new(iters))?;
    Ok((solution.x, solution.objective))
}
