use std::convert::Infallible;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use downhill_core::Pure;
use thiserror::Error;

use super::{
    Action, Coefficients, Config, Error, Event, Status, Step, maximize, maximize_unobserved,
    minimize, minimize_unobserved, optimize,
};

fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

/// `Σ (x_i - c_i)²` centered at `c_i = 1 + i / 2`.
fn bowl(x: &[f64]) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, xi)| (xi - center(i)).powi(2))
        .sum()
}

fn center(i: usize) -> f64 {
    1.0 + 0.5 * i as f64
}

fn max_center_error(x: &[f64]) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, xi)| (xi - center(i)).abs())
        .fold(0.0, f64::max)
}

#[test]
fn minimizes_rosenbrock() {
    let objective = Pure(rosenbrock);

    let solution = minimize_unobserved(&objective, &[4.0, 5.0], &Config::default())
        .expect("should not fail");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.iters, 1000);
    assert_abs_diff_eq!(solution.x[0], 1.0, epsilon = 1e-2);
    assert_abs_diff_eq!(solution.x[1], 1.0, epsilon = 1e-2);
    assert!(solution.objective < 1e-4);
}

#[test]
fn minimizes_rosenbrock_with_doubling_coefficients() {
    let objective = Pure(rosenbrock);
    let config = Config::default().with_coefficients(Coefficients::doubling());

    let solution = minimize_unobserved(&objective, &[4.0, 5.0], &config).expect("should not fail");

    assert_abs_diff_eq!(solution.x[0], 1.0, epsilon = 1e-2);
    assert_abs_diff_eq!(solution.x[1], 1.0, epsilon = 1e-2);
    assert!(solution.objective < 1e-4);
}

#[test]
fn optimize_matches_the_reference_run() {
    let objective = Pure(rosenbrock);

    let (x, value) = optimize(2, &[4.0, 5.0], &objective, 1000).expect("should not fail");

    assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-2);
    assert_abs_diff_eq!(x[1], 1.0, epsilon = 1e-2);
    assert_abs_diff_eq!(value, 0.0, epsilon = 1e-4);
}

#[test]
fn finds_the_bottom_of_small_bowls() {
    let objective = Pure(bowl);
    let config = Config::new(500);

    for d in 1..=5 {
        let seeds = [
            vec![3.0; d],
            (0..d).map(|i| -2.0 + 0.3 * i as f64).collect(),
        ];
        for seed in seeds {
            let solution = minimize_unobserved(&objective, &seed, &config).unwrap();
            assert!(
                max_center_error(&solution.x) < 1e-4,
                "d = {d}, seed = {seed:?}, x = {:?}",
                solution.x
            );
        }
    }
}

#[test]
fn restarts_reach_the_bottom_of_larger_bowls() {
    // A single run of 500 iterations stalls short of the center for d > 5,
    // so the search restarts from its own result.
    let objective = Pure(bowl);
    let config = Config::new(500);

    for d in 6..=10 {
        let mut x = vec![3.0; d];
        let mut cycles = 0;
        while max_center_error(&x) >= 1e-4 && cycles < 20 {
            x = minimize_unobserved(&objective, &x, &config).unwrap().x;
            cycles += 1;
        }
        assert!(max_center_error(&x) < 1e-4, "d = {d}, x = {x:?}");
    }
}

#[test]
fn best_value_never_increases() {
    let objective = Pure(rosenbrock);
    let mut history = Vec::new();

    let observer = |event: &Event<'_>| {
        history.push(event.best.objective);
        None
    };

    let solution = minimize(&objective, &[-1.2, 1.0], &Config::default(), observer).unwrap();

    assert_eq!(history.len(), 1000);
    assert!(history.windows(2).all(|w| w[1] <= w[0]));
    assert_relative_eq!(*history.last().unwrap(), solution.objective);
}

#[test]
fn events_report_progress() {
    let objective = Pure(bowl);
    let mut iters = Vec::new();
    let mut last_evaluations = 3;

    let observer = |event: &Event<'_>| {
        iters.push(event.iter);
        assert!(event.evaluations > last_evaluations);
        assert!(event.spread() >= 0.0);
        assert_eq!(event.best.x.len(), 2);
        last_evaluations = event.evaluations;
        None
    };

    let solution = minimize(&objective, &[3.0, 3.0], &Config::new(25), observer).unwrap();

    assert_eq!(iters, (1..=25).collect::<Vec<_>>());
    assert_eq!(solution.evaluations, last_evaluations);
}

#[test]
fn one_dimension_runs_the_full_cycle() {
    let objective = Pure(|x: &[f64]| (x[0] - 2.0).powi(2));
    let mut steps = Vec::new();

    let observer = |event: &Event<'_>| {
        steps.push(event.step);
        None
    };

    let solution = minimize(&objective, &[5.0], &Config::new(50), observer).unwrap();

    assert_eq!(steps.len(), 50);
    assert!(steps.contains(&Step::Expand));
    assert!(steps.contains(&Step::ContractInside));
    assert_abs_diff_eq!(solution.x[0], 2.0, epsilon = 1e-8);
}

#[test]
fn counts_evaluations() {
    // f(x) = x on {1, 1.05}: one iteration reflects to 0.95 and then
    // expands, so two evaluations on top of the initial two.
    let objective = Pure(|x: &[f64]| x[0]);

    let solution = minimize_unobserved(&objective, &[1.0], &Config::new(1)).unwrap();

    assert_eq!(solution.iters, 1);
    assert_eq!(solution.evaluations, 4);
}

#[test]
fn zero_iterations_return_the_seed() {
    // The seed is the lowest vertex of its initial simplex.
    let objective = Pure(|x: &[f64]| x.iter().map(|xi| xi * xi).sum::<f64>());

    let (x, value) = optimize(2, &[1.0, 2.0], &objective, 0).unwrap();

    assert_eq!(x, vec![1.0, 2.0]);
    assert_relative_eq!(value, 5.0);

    let solution = minimize_unobserved(&objective, &[1.0, 2.0], &Config::new(0)).unwrap();
    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.evaluations, 3);
}

#[test]
fn rejects_empty_seed() {
    let objective = Pure(bowl);

    assert!(matches!(
        optimize(0, &[], &objective, 10),
        Err(Error::InvalidDimension)
    ));
    assert!(matches!(
        minimize_unobserved(&objective, &[], &Config::default()),
        Err(Error::InvalidDimension)
    ));
}

#[test]
fn rejects_seed_of_the_wrong_length() {
    let objective = Pure(bowl);

    let result = optimize(3, &[1.0, 2.0], &objective, 10);

    assert!(matches!(
        result,
        Err(Error::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    ));
}

#[derive(Debug, Error)]
#[error("no evaluations below {0}")]
struct BelowFloor(f64);

#[test]
fn objective_errors_propagate() {
    let objective = |x: &[f64]| {
        if x[0] < 0.9 {
            Err(BelowFloor(0.9))
        } else {
            Ok(x[0])
        }
    };

    let result = minimize_unobserved(&objective, &[1.0], &Config::default());

    let source = match result {
        Err(Error::Objective(source)) => source,
        other => panic!("expected an objective error, got {other:?}"),
    };
    assert!(source.downcast_ref::<BelowFloor>().is_some());
}

#[test]
fn observer_can_stop_early() {
    let objective = Pure(rosenbrock);
    let mut seen = 0;

    let observer = |event: &Event<'_>| {
        seen += 1;
        (event.iter == 5).then_some(Action::StopEarly)
    };

    let solution = minimize(&objective, &[4.0, 5.0], &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 5);
    assert_eq!(seen, 5);
}

#[test]
fn stopping_early_keeps_the_current_best() {
    let objective = Pure(rosenbrock);
    let config = Config::new(40);

    let full = minimize_unobserved(&objective, &[4.0, 5.0], &config).unwrap();
    let stopped = minimize(&objective, &[4.0, 5.0], &Config::default(), |event: &Event<'_>| {
        (event.iter == 40).then_some(Action::StopEarly)
    })
    .unwrap();

    assert_eq!(stopped.x, full.x);
    assert_eq!(stopped.objective, full.objective);
    assert_eq!(stopped.evaluations, full.evaluations);
}

#[test]
fn value_tolerance_stops_the_search() {
    let objective = Pure(bowl);
    let config = Config::default().with_value_tolerance(1e-12).unwrap();

    let solution = minimize_unobserved(&objective, &[3.0, 3.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 1000);
    assert_abs_diff_eq!(solution.x[0], 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(solution.x[1], 1.5, epsilon = 1e-4);
}

#[test]
fn flat_simplex_converges_before_the_first_iteration() {
    let objective = Pure(|_: &[f64]| 7.0);
    let config = Config::default().with_value_tolerance(0.0).unwrap();

    let solution = minimize_unobserved(&objective, &[1.0, 2.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.evaluations, 3);
    assert_eq!(solution.x, vec![1.0, 2.0]);
}

#[test]
fn non_finite_values_propagate_unless_checked() {
    // NaN below zero; the search reaches negative x within a few expansions.
    let objective = Pure(|x: &[f64]| x[0].sqrt());

    let unchecked = minimize_unobserved(&objective, &[1.0], &Config::new(20));
    assert!(unchecked.is_ok());

    let checked = minimize_unobserved(&objective, &[1.0], &Config::new(20).with_finite_check(true));
    let (x, value) = match checked {
        Err(Error::NonFinite { x, value }) => (x, value),
        other => panic!("expected a non-finite error, got {other:?}"),
    };
    assert!(x[0] < 0.0);
    assert!(value.is_nan());
}

#[test]
fn maximizes_in_the_objective_sign() {
    let objective = |x: &[f64]| Ok::<f64, Infallible>(-((x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2)));
    let mut history = Vec::new();

    let observer = |event: &Event<'_>| {
        history.push(event.best.objective);
        None
    };

    let solution = maximize(&objective, &[0.5, 0.5], &Config::default(), observer).unwrap();

    assert_abs_diff_eq!(solution.x[0], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.x[1], -2.0, epsilon = 1e-6);
    assert!(solution.objective <= 0.0);
    assert_abs_diff_eq!(solution.objective, 0.0, epsilon = 1e-10);
    assert!(history.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn maximize_unobserved_agrees_with_minimizing_the_negation() {
    let objective = Pure(|x: &[f64]| -bowl(x));

    let max = maximize_unobserved(&objective, &[3.0, 3.0], &Config::new(200)).unwrap();
    let min = minimize_unobserved(&Pure(bowl), &[3.0, 3.0], &Config::new(200)).unwrap();

    assert_eq!(max.x, min.x);
    assert_relative_eq!(max.objective, -min.objective);
}
