use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Seed used when no coordinates are given on the command line.
pub const DEFAULT_SEED: [f64; 3] = [4.0, 5.0, 6.0];

#[derive(Debug, Parser)]
#[command(
    name = "downhill",
    about = "Derivative-free minimization with the Nelder–Mead simplex method",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub solver: SolverArgs,

    /// Seed coordinates for the Rosenbrock run (default: 4 5 6)
    #[arg(value_name = "X", allow_negative_numbers = true)]
    pub seed: Vec<f64>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Refine a stored point against sample data, rewriting the point file
    /// after every cycle
    ///
    /// Example:
    ///   downhill refine --points coeffs.txt --data samples.txt --cycles 5
    Refine(RefineArgs),
}

#[derive(Debug, Args)]
pub struct RefineArgs {
    /// File holding the current point, one coordinate per line
    #[arg(long = "points", value_name = "FILE")]
    pub points: PathBuf,

    /// Two-column sample file: x and y per line
    #[arg(long = "data", value_name = "FILE")]
    pub data: PathBuf,

    /// Number of read-optimize-write cycles
    #[arg(long = "cycles", value_name = "N", default_value_t = 1)]
    pub cycles: usize,
}

/// Solver settings shared by every mode.
///
/// Flags override values from the settings file.
#[derive(Debug, Default, Args)]
pub struct SolverArgs {
    /// TOML settings file
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Iterations per run
    #[arg(long = "iters", value_name = "N", global = true)]
    pub iters: Option<usize>,

    /// Reflection coefficient
    #[arg(long = "alpha", value_name = "A", global = true)]
    pub alpha: Option<f64>,

    /// Expansion coefficient
    #[arg(long = "gamma", value_name = "G", global = true)]
    pub gamma: Option<f64>,

    /// Contraction coefficient
    #[arg(long = "rho", value_name = "R", global = true)]
    pub rho: Option<f64>,

    /// Shrink coefficient
    #[arg(long = "sigma", value_name = "S", global = true)]
    pub sigma: Option<f64>,

    /// Stop a run once this many seconds have elapsed
    #[arg(long = "deadline", value_name = "SECS", global = true)]
    pub deadline: Option<f64>,
}

impl Cli {
    /// Returns the seed coordinates, falling back to [`DEFAULT_SEED`].
    pub fn seed(&self) -> Vec<f64> {
        if self.seed.is_empty() {
            DEFAULT_SEED.to_vec()
        } else {
            self.seed.clone()
        }
    }
}
