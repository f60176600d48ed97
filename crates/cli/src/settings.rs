use std::{fs, path::Path};

use anyhow::{Context, Result};
use downhill_solvers::optimization::nelder_mead::{Coefficients, Config, InitialStep};
use serde::Deserialize;

use crate::cli::SolverArgs;

/// Solver settings read from a TOML file.
///
/// Every field is optional. Missing values fall back to the solver defaults.
///
/// ```toml
/// iters = 2000
/// value_tolerance = 1e-12
/// check_finite = true
///
/// [coefficients]
/// expansion = 2.0
///
/// [initial_step]
/// relative = 0.1
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub iters: Option<usize>,
    pub coefficients: CoefficientSettings,
    pub initial_step: InitialStepSettings,
    pub value_tolerance: Option<f64>,
    pub check_finite: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoefficientSettings {
    pub reflection: Option<f64>,
    pub expansion: Option<f64>,
    pub contraction: Option<f64>,
    pub shrink: Option<f64>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitialStepSettings {
    pub relative: Option<f64>,
    pub zero_offset: Option<f64>,
}

impl Settings {
    /// Reads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing settings file {}", path.display()))
    }

    /// Parses settings from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads the file named by `args`, if any, then applies the flag overrides.
    pub fn resolve(args: &SolverArgs) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply(args);
        Ok(settings)
    }

    /// Overrides settings with any values given on the command line.
    pub fn apply(&mut self, args: &SolverArgs) {
        self.iters = args.iters.or(self.iters);

        let c = &mut self.coefficients;
        c.reflection = args.alpha.or(c.reflection);
        c.expansion = args.gamma.or(c.expansion);
        c.contraction = args.rho.or(c.contraction);
        c.shrink = args.sigma.or(c.shrink);
    }

    /// Builds a validated solver config.
    pub fn to_config(&self) -> Result<Config> {
        let defaults = Config::default();

        let base = defaults.coefficients();
        let c = &self.coefficients;
        let coefficients = Coefficients::new(
            c.reflection.unwrap_or(base.reflection()),
            c.expansion.unwrap_or(base.expansion()),
            c.contraction.unwrap_or(base.contraction()),
            c.shrink.unwrap_or(base.shrink()),
        )
        .context("invalid coefficients")?;

        let base = defaults.initial_step();
        let s = &self.initial_step;
        let initial_step = InitialStep::new(
            s.relative.unwrap_or(base.relative()),
            s.zero_offset.unwrap_or(base.zero_offset()),
        )
        .context("invalid initial step")?;

        let mut config = Config::new(self.iters.unwrap_or(defaults.max_iters()))
            .with_coefficients(coefficients)
            .with_initial_step(initial_step)
            .with_finite_check(self.check_finite);

        if let Some(tol) = self.value_tolerance {
            config = config
                .with_value_tolerance(tol)
                .context("invalid value tolerance")?;
        }

        Ok(config)
    }
}
