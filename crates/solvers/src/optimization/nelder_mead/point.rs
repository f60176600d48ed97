use ndarray::ArrayView1;

/// A simplex vertex with its cached objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<'a> {
    /// The vertex coordinates.
    pub x: ArrayView1<'a, f64>,

    /// The objective value at `x`.
    pub objective: f64,
}

impl<'a> Point<'a> {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: ArrayView1<'a, f64>, objective: f64) -> Self {
        Self { x, objective }
    }
}
