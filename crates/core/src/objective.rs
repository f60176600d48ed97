mod negate;

use std::convert::Infallible;

pub use negate::Negate;

/// A scalar function of a real vector.
///
/// Solvers search for the `x` that minimizes [`Objective::evaluate`]. The
/// dimension of the problem is the length of `x`, which stays fixed for the
/// whole run.
///
/// Evaluations are expected to be deterministic. Solvers do not cache or
/// retry calls; wrap the objective if either is needed.
///
/// Closures of the form `Fn(&[f64]) -> Result<f64, E>` implement this trait
/// directly. Use [`Pure`] for functions that cannot fail.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the value cannot be computed.
    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error>;
}

impl<F, E> Objective for F
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        self(x)
    }
}

/// Adapter for objective functions that cannot fail.
///
/// ```
/// use downhill_core::{Objective, Pure};
///
/// let sphere = Pure(|x: &[f64]| x.iter().map(|xi| xi * xi).sum::<f64>());
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), Ok(5.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pure<F>(pub F);

impl<F> Objective for Pure<F>
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}
