use downhill_core::Objective;
use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::optimization::evaluate::Evaluator;

use super::{Error, InitialStep};

/// The working simplex: `d + 1` vertices in `d` dimensions and the objective
/// value cached for each one.
///
/// Vertices are the rows of a `(d + 1) × d` matrix. Between updates,
/// `values[i]` is the objective evaluated at row `i`.
#[derive(Debug, Clone)]
pub(super) struct Simplex {
    vertices: Array2<f64>,
    values: Vec<f64>,
}

impl Simplex {
    /// Builds the initial simplex around `seed` and evaluates every vertex.
    pub(super) fn new<O: Objective>(
        seed: &[f64],
        step: &InitialStep,
        eval: &mut Evaluator<'_, O>,
    ) -> Result<Self, Error> {
        let vertices = initial_vertices(seed, step);
        let values = vertices
            .axis_iter(Axis(0))
            .map(|vertex| eval.evaluate(vertex))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { vertices, values })
    }

    pub(super) fn dimension(&self) -> usize {
        self.vertices.ncols()
    }

    pub(super) fn vertex(&self, index: usize) -> ArrayView1<'_, f64> {
        self.vertices.row(index)
    }

    pub(super) fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub(super) fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mean of every vertex except `exclude`.
    pub(super) fn centroid(&self, exclude: usize) -> Array1<f64> {
        let mut sum = Array1::<f64>::zeros(self.dimension());
        for (index, vertex) in self.vertices.axis_iter(Axis(0)).enumerate() {
            if index != exclude {
                sum += &vertex;
            }
        }
        sum / self.dimension() as f64
    }

    /// Replaces one vertex together with its cached value.
    pub(super) fn replace(&mut self, index: usize, x: &Array1<f64>, value: f64) {
        self.vertices.row_mut(index).assign(x);
        self.values[index] = value;
    }

    /// Moves every vertex except `anchor` toward it by `factor`, then
    /// re-evaluates all vertices.
    pub(super) fn shrink<O: Objective>(
        &mut self,
        anchor: usize,
        factor: f64,
        eval: &mut Evaluator<'_, O>,
    ) -> Result<(), Error> {
        let target = self.vertices.row(anchor).to_owned();

        for (index, mut vertex) in self.vertices.axis_iter_mut(Axis(0)).enumerate() {
            if index != anchor {
                vertex.zip_mut_with(&target, |v, &t| *v = t + factor * (*v - t));
            }
        }

        for (value, vertex) in self.values.iter_mut().zip(self.vertices.axis_iter(Axis(0))) {
            *value = eval.evaluate(vertex)?;
        }

        Ok(())
    }

    /// Consumes the simplex and returns one vertex with its value.
    pub(super) fn into_vertex(self, index: usize) -> (Vec<f64>, f64) {
        (self.vertices.row(index).to_vec(), self.values[index])
    }
}

/// Places the seed at vertex 0 and perturbs one coordinate per other vertex.
pub(super) fn initial_vertices(seed: &[f64], step: &InitialStep) -> Array2<f64> {
    let d = seed.len();
    Array2::from_shape_fn((d + 1, d), |(row, col)| {
        if row == col + 1 {
            step.perturb(seed[col])
        } else {
            seed[col]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use downhill_core::Pure;
    use ndarray::array;

    fn sum_of_squares(x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }

    #[test]
    fn initial_vertices_offset_zero_coordinates() {
        let vertices = initial_vertices(&[0.0, 2.0, 0.0], &InitialStep::default());

        let expected = array![
            [0.0, 2.0, 0.0],
            [0.000_25, 2.0, 0.0],
            [0.0, 2.1, 0.0],
            [0.0, 2.0, 0.000_25],
        ];
        assert_eq!(vertices.dim(), (4, 3));
        for (row, expected_row) in vertices.rows().into_iter().zip(expected.rows()) {
            for (v, e) in row.iter().zip(expected_row.iter()) {
                assert_relative_eq!(*v, *e);
            }
        }
    }

    #[test]
    fn initial_vertices_keep_seed_unmodified() {
        let seed = [4.0, -5.0];
        let vertices = initial_vertices(&seed, &InitialStep::new(0.1, 1.0).unwrap());

        assert_eq!(vertices.row(0).to_vec(), seed.to_vec());
        assert_relative_eq!(vertices[[1, 0]], 4.4);
        assert_relative_eq!(vertices[[2, 1]], -5.5);
    }

    #[test]
    fn new_evaluates_every_vertex() {
        let objective = Pure(sum_of_squares);
        let mut eval = Evaluator::new(&objective, false);

        let simplex = Simplex::new(&[1.0, 2.0], &InitialStep::default(), &mut eval).unwrap();

        assert_eq!(eval.count(), 3);
        assert_eq!(simplex.dimension(), 2);
        assert_relative_eq!(simplex.value(0), 5.0);
        assert_relative_eq!(simplex.value(1), 1.05 * 1.05 + 4.0);
        assert_relative_eq!(simplex.value(2), 1.0 + 2.1 * 2.1);
    }

    #[test]
    fn centroid_excludes_one_vertex() {
        let objective = Pure(sum_of_squares);
        let mut eval = Evaluator::new(&objective, false);
        let simplex = Simplex::new(&[1.0, 2.0], &InitialStep::default(), &mut eval).unwrap();

        // Vertices: [1, 2], [1.05, 2], [1, 2.1].
        let centroid = simplex.centroid(2);

        assert_relative_eq!(centroid[0], 1.025);
        assert_relative_eq!(centroid[1], 2.0);
    }

    #[test]
    fn replace_updates_vertex_and_value_together() {
        let objective = Pure(sum_of_squares);
        let mut eval = Evaluator::new(&objective, false);
        let mut simplex = Simplex::new(&[1.0, 2.0], &InitialStep::default(), &mut eval).unwrap();

        simplex.replace(1, &array![3.0, 4.0], 25.0);

        assert_eq!(simplex.vertex(1).to_vec(), vec![3.0, 4.0]);
        assert_relative_eq!(simplex.value(1), 25.0);
    }

    #[test]
    fn shrink_halves_distances_and_reevaluates() {
        let objective = Pure(sum_of_squares);
        let mut eval = Evaluator::new(&objective, false);
        let mut simplex = Simplex::new(&[2.0, 4.0], &InitialStep::default(), &mut eval).unwrap();

        // Vertices: [2, 4], [2.1, 4], [2, 4.2].
        simplex.shrink(0, 0.5, &mut eval).unwrap();

        assert_eq!(eval.count(), 6);
        assert_eq!(simplex.vertex(0).to_vec(), vec![2.0, 4.0]);
        assert_relative_eq!(simplex.vertex(1)[0], 2.05);
        assert_relative_eq!(simplex.vertex(2)[1], 4.1);
        for index in 0..3 {
            let x = simplex.vertex(index).to_vec();
            assert_relative_eq!(simplex.value(index), sum_of_squares(&x));
        }
    }

    #[test]
    fn into_vertex_returns_coordinates_and_value() {
        let objective = Pure(sum_of_squares);
        let mut eval = Evaluator::new(&objective, false);
        let simplex = Simplex::new(&[3.0], &InitialStep::default(), &mut eval).unwrap();

        let (x, value) = simplex.into_vertex(0);

        assert_eq!(x, vec![3.0]);
        assert_relative_eq!(value, 9.0);
    }
}
