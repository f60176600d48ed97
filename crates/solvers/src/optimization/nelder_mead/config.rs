use thiserror::Error;

/// Configuration for the Nelder–Mead solver.
///
/// By default the solver runs exactly [`Config::max_iters`] iterations and
/// stops. An optional value tolerance adds an early convergence test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    coefficients: Coefficients,
    initial_step: InitialStep,
    value_tolerance: Option<f64>,
    check_finite: bool,
}

/// Errors that can occur when validating a Nelder–Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("reflection coefficient must be finite and positive")]
    Reflection,

    #[error("expansion coefficient must be finite and greater than 1")]
    Expansion,

    #[error("contraction coefficient must be strictly between 0 and 1")]
    Contraction,

    #[error("shrink coefficient must be strictly between 0 and 1")]
    Shrink,

    #[error("relative initial step must be finite and positive")]
    RelativeStep,

    #[error("zero offset must be finite and nonzero")]
    ZeroOffset,

    #[error("value tolerance must be finite and non-negative")]
    ValueTolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Config {
    /// Creates a config that runs `max_iters` iterations with the reference
    /// coefficients and initial step.
    #[must_use]
    pub fn new(max_iters: usize) -> Self {
        Self {
            max_iters,
            coefficients: Coefficients::default(),
            initial_step: InitialStep::default(),
            value_tolerance: None,
            check_finite: false,
        }
    }

    /// Replaces the move coefficients.
    #[must_use]
    pub fn with_coefficients(mut self, coefficients: Coefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    /// Replaces the rule used to build the initial simplex.
    #[must_use]
    pub fn with_initial_step(mut self, initial_step: InitialStep) -> Self {
        self.initial_step = initial_step;
        self
    }

    /// Stops the search once `f(worst) - f(best) <= tol`.
    ///
    /// The test runs before each iteration, so a satisfied tolerance on the
    /// initial simplex returns without updating it.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn with_value_tolerance(mut self, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::ValueTolerance);
        }
        self.value_tolerance = Some(tol);
        Ok(self)
    }

    /// Enables or disables rejection of NaN and infinite objective values.
    #[must_use]
    pub fn with_finite_check(mut self, enabled: bool) -> Self {
        self.check_finite = enabled;
        self
    }

    /// Returns the number of iterations to run.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the move coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Returns the initial simplex rule.
    #[must_use]
    pub fn initial_step(&self) -> &InitialStep {
        &self.initial_step
    }

    /// Returns the value-spread tolerance, if enabled.
    #[must_use]
    pub fn value_tolerance(&self) -> Option<f64> {
        self.value_tolerance
    }

    /// Returns whether non-finite objective values are rejected.
    #[must_use]
    pub fn check_finite(&self) -> bool {
        self.check_finite
    }
}

/// Coefficients for the reflect, expand, contract, and shrink moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    reflection: f64,
    expansion: f64,
    contraction: f64,
    shrink: f64,
}

impl Default for Coefficients {
    /// Reflection 1.0, expansion 1.5, contraction 0.5, shrink 0.5.
    fn default() -> Self {
        Self {
            reflection: 1.0,
            expansion: 1.5,
            contraction: 0.5,
            shrink: 0.5,
        }
    }
}

impl Coefficients {
    /// Creates validated move coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error unless `reflection > 0`, `expansion > 1`, and both
    /// `contraction` and `shrink` lie strictly between 0 and 1.
    pub fn new(
        reflection: f64,
        expansion: f64,
        contraction: f64,
        shrink: f64,
    ) -> Result<Self, ConfigError> {
        if !reflection.is_finite() || reflection <= 0.0 {
            return Err(ConfigError::Reflection);
        }
        if !expansion.is_finite() || expansion <= 1.0 {
            return Err(ConfigError::Expansion);
        }
        if !(contraction > 0.0 && contraction < 1.0) {
            return Err(ConfigError::Contraction);
        }
        if !(shrink > 0.0 && shrink < 1.0) {
            return Err(ConfigError::Shrink);
        }

        Ok(Self {
            reflection,
            expansion,
            contraction,
            shrink,
        })
    }

    /// The textbook set: reflection 1.0, expansion 2.0, contraction 0.5,
    /// shrink 0.5.
    #[must_use]
    pub fn doubling() -> Self {
        Self {
            expansion: 2.0,
            ..Self::default()
        }
    }

    /// Returns the reflection coefficient (α).
    #[must_use]
    pub fn reflection(&self) -> f64 {
        self.reflection
    }

    /// Returns the expansion coefficient (γ).
    #[must_use]
    pub fn expansion(&self) -> f64 {
        self.expansion
    }

    /// Returns the contraction coefficient (ρ).
    #[must_use]
    pub fn contraction(&self) -> f64 {
        self.contraction
    }

    /// Returns the shrink coefficient (σ).
    #[must_use]
    pub fn shrink(&self) -> f64 {
        self.shrink
    }
}

/// How the initial simplex is spread around the seed.
///
/// Vertex `k` (for `k >= 1`) is the seed with coordinate `k - 1` scaled by
/// `1 + relative`. A zero coordinate cannot be scaled away from zero, so it
/// is set to `zero_offset` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialStep {
    relative: f64,
    zero_offset: f64,
}

impl Default for InitialStep {
    /// A 5% relative step and an offset of 0.00025 for zero coordinates.
    fn default() -> Self {
        Self {
            relative: 0.05,
            zero_offset: 0.000_25,
        }
    }
}

impl InitialStep {
    /// Creates a validated initial step rule.
    ///
    /// # Errors
    ///
    /// Returns an error if `relative` is not finite and positive, or if
    /// `zero_offset` is zero or non-finite.
    pub fn new(relative: f64, zero_offset: f64) -> Result<Self, ConfigError> {
        if !relative.is_finite() || relative <= 0.0 {
            return Err(ConfigError::RelativeStep);
        }
        if !zero_offset.is_finite() || zero_offset == 0.0 {
            return Err(ConfigError::ZeroOffset);
        }

        Ok(Self {
            relative,
            zero_offset,
        })
    }

    /// Returns the relative step applied to nonzero coordinates.
    #[must_use]
    pub fn relative(&self) -> f64 {
        self.relative
    }

    /// Returns the absolute value used in place of zero coordinates.
    #[must_use]
    pub fn zero_offset(&self) -> f64 {
        self.zero_offset
    }

    /// Returns the perturbed value of one seed coordinate.
    pub(super) fn perturb(&self, coordinate: f64) -> f64 {
        if coordinate == 0.0 {
            self.zero_offset
        } else {
            (1.0 + self.relative) * coordinate
        }
    }
}
