use std::{io::Write, time::Duration};

use anyhow::{Context, Result, bail};
use downhill_core::{Objective, Observer};
use downhill_observers::{Deadline, Trace};
use downhill_solvers::optimization::nelder_mead::{self, Action, Config, Event, Solution};
use tracing::info;

use crate::{
    cli::RefineArgs,
    objectives::{PolynomialFit, Rosenbrock},
    points,
};

/// Iterations between logged events.
const TRACE_EVERY: usize = 100;

/// Observers attached to every run.
struct Watch {
    trace: Trace,
    deadline: Option<Deadline>,
}

impl Watch {
    fn new(deadline: Option<Duration>) -> Self {
        Self {
            trace: Trace::every(TRACE_EVERY),
            deadline: deadline.map(Deadline::after),
        }
    }

    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        let _: Option<Action> = self.trace.observe(event);
        self.deadline.as_mut().and_then(|d| d.observe(event))
    }
}

fn run<O: Objective>(
    objective: &O,
    seed: &[f64],
    config: &Config,
    watch: &mut Watch,
) -> Result<Solution> {
    let observer = |event: &Event<'_>| watch.observe(event);
    nelder_mead::minimize(objective, seed, config, observer).context("nelder-mead search failed")
}

/// Converts a deadline in seconds into a duration.
pub fn deadline(secs: Option<f64>) -> Result<Option<Duration>> {
    secs.map(|secs| {
        Duration::try_from_secs_f64(secs).with_context(|| format!("invalid deadline {secs}"))
    })
    .transpose()
}

/// Minimizes the Rosenbrock function from `seed`.
///
/// Prints the starting value, then the best point (tab separated) and its
/// value.
pub fn rosenbrock(
    seed: &[f64],
    config: &Config,
    deadline: Option<Duration>,
    out: &mut impl Write,
) -> Result<Solution> {
    let initial = Rosenbrock.evaluate(seed)?;
    writeln!(out, "{initial:.6}")?;

    let solution = run(&Rosenbrock, seed, config, &mut Watch::new(deadline))?;
    info!(status = ?solution.status, iters = solution.iters, "rosenbrock run finished");

    let coordinates: Vec<String> = solution.x.iter().map(|x| format!("{x:.6}")).collect();
    writeln!(out, "{}", coordinates.join("\t"))?;
    writeln!(out, "{:.6}", solution.objective)?;

    Ok(solution)
}

/// Runs the read-optimize-write loop of `downhill refine`.
///
/// Each cycle starts fresh from the point stored in the file. Returns the
/// solution of the last cycle.
pub fn refine(
    args: &RefineArgs,
    config: &Config,
    deadline: Option<Duration>,
    out: &mut impl Write,
) -> Result<Solution> {
    if args.cycles == 0 {
        bail!("refine needs at least one cycle");
    }

    let fit = PolynomialFit::load(&args.data)?;
    info!(samples = fit.samples().len(), cycles = args.cycles, "refining");
    let mut last = None;

    for cycle in 1..=args.cycles {
        let seed = points::read(&args.points)?;
        let solution = run(&fit, &seed, config, &mut Watch::new(deadline))
            .with_context(|| format!("cycle {cycle}"))?;
        points::write(&args.points, &solution.x)?;

        info!(cycle, objective = solution.objective, "refine cycle finished");
        writeln!(out, "cycle {cycle}: {:.17e}", solution.objective)?;
        last = Some(solution);
    }

    last.context("refine ran no cycles")
}
