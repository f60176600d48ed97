use super::Objective;

/// Adapter that negates the objective value.
///
/// Borrows the wrapped objective, so maximization can minimize the negated
/// objective without taking ownership of it.
#[derive(Debug)]
pub struct Negate<'a, O: ?Sized>(pub &'a O);

impl<O: ?Sized> Clone for Negate<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized> Copy for Negate<'_, O> {}

impl<O: Objective + ?Sized> Objective for Negate<'_, O> {
    type Error = O::Error;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        self.0.evaluate(x).map(|v| -v)
    }
}
