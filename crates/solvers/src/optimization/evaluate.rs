use downhill_core::Objective;
use ndarray::ArrayView1;

use super::nelder_mead::Error;

/// Evaluates an objective on behalf of a solver.
///
/// Counts every call, boxes collaborator errors, and optionally rejects
/// non-finite values.
pub(crate) struct Evaluator<'a, O> {
    objective: &'a O,
    check_finite: bool,
    count: usize,
}

impl<'a, O: Objective> Evaluator<'a, O> {
    pub(crate) fn new(objective: &'a O, check_finite: bool) -> Self {
        Self {
            objective,
            check_finite,
            count: 0,
        }
    }

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Objective`] if the objective fails, or
    /// [`Error::NonFinite`] if the finiteness check is enabled and the value
    /// is NaN or infinite.
    pub(crate) fn evaluate(&mut self, x: ArrayView1<'_, f64>) -> Result<f64, Error> {
        self.count += 1;

        let value = match x.as_slice() {
            Some(slice) => self.objective.evaluate(slice),
            None => self.objective.evaluate(&x.to_vec()),
        }
        .map_err(Error::objective)?;

        if self.check_finite && !value.is_finite() {
            return Err(Error::NonFinite {
                x: x.to_vec(),
                value,
            });
        }

        Ok(value)
    }

    /// Returns the number of evaluations performed so far.
    pub(crate) fn count(&self) -> usize {
        self.count
    }
}
