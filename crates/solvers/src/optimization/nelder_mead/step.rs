use downhill_core::Objective;
use ndarray::Array1;

use crate::optimization::evaluate::Evaluator;

use super::{Coefficients, Error, rank::Ranks, simplex::Simplex};

/// The move a Nelder–Mead iteration made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The worst vertex was replaced by its reflection through the centroid.
    Reflect,

    /// The reflection beat the best vertex and was pushed further out.
    Expand,

    /// The reflection landed between the second-best and worst values and
    /// was pulled back toward the centroid.
    ContractOutside,

    /// The reflection was no better than the worst vertex, and the point
    /// halfway between the worst vertex and the centroid improved on it.
    ContractInside,

    /// Nothing improved on the worst vertex, so every vertex moved toward
    /// the best.
    Shrink,
}

/// Advances the simplex by one Nelder–Mead iteration.
///
/// Costs one or two evaluations, or `d + 2` when the simplex shrinks. On
/// success every cached value matches its vertex again.
///
/// An outside contraction replaces the worst vertex unconditionally,
/// without comparing the contracted point to the reflection.
pub(super) fn advance<O: Objective>(
    simplex: &mut Simplex,
    ranks: Ranks,
    coefficients: &Coefficients,
    eval: &mut Evaluator<'_, O>,
) -> Result<Step, Error> {
    let alpha = coefficients.reflection();
    let gamma = coefficients.expansion();
    let rho = coefficients.contraction();
    let sigma = coefficients.shrink();

    let f_best = simplex.value(ranks.best);
    let f_second = simplex.value(ranks.second);
    let f_worst = simplex.value(ranks.worst);

    let centroid = simplex.centroid(ranks.worst);
    let x_worst = simplex.vertex(ranks.worst).to_owned();

    let x_r: Array1<f64> = &centroid * (1.0 + alpha) - &x_worst * alpha;
    let f_r = eval.evaluate(x_r.view())?;

    if f_r < f_worst {
        let (x_new, f_new, step) = if f_r < f_second {
            if f_r > f_best {
                (x_r, f_r, Step::Reflect)
            } else {
                let x_e = &x_r * gamma + &centroid * (1.0 - gamma);
                let f_e = eval.evaluate(x_e.view())?;
                if f_e < f_best {
                    (x_e, f_e, Step::Expand)
                } else {
                    (x_r, f_r, Step::Reflect)
                }
            }
        } else {
            let x_c = &centroid * rho + &x_r * (1.0 - rho);
            let f_c = eval.evaluate(x_c.view())?;
            (x_c, f_c, Step::ContractOutside)
        };

        simplex.replace(ranks.worst, &x_new, f_new);
        return Ok(step);
    }

    let x_c = &centroid * rho + &x_worst * (1.0 - rho);
    let f_c = eval.evaluate(x_c.view())?;

    if f_c < f_worst {
        simplex.replace(ranks.worst, &x_c, f_c);
        Ok(Step::ContractInside)
    } else {
        simplex.shrink(ranks.best, sigma, eval)?;
        Ok(Step::Shrink)
    }
}
