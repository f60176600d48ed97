//! Objectives the command line can minimize.

use std::{convert::Infallible, fs, path::Path};

use anyhow::{Context, Result, bail};
use downhill_core::Objective;

/// The Rosenbrock function in `d` dimensions.
///
/// `Σ 100 (x[i+1] - x[i]²)² + (1 - x[i])²`, with its minimum of zero at
/// `(1, …, 1)`. A single coordinate has nothing to couple and evaluates to
/// zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;

impl Objective for Rosenbrock {
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(x.windows(2)
            .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
            .sum())
    }
}

/// Sum of squared residuals of a polynomial fit.
///
/// The point being optimized holds the polynomial coefficients, lowest
/// degree first. The value is `Σ (y - Σ c[k] x^k)²` over the samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFit {
    samples: Vec<(f64, f64)>,
}

impl PolynomialFit {
    #[must_use]
    pub fn new(samples: Vec<(f64, f64)>) -> Self {
        Self { samples }
    }

    /// Reads samples from a file of whitespace-separated `x y` pairs.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading samples {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing samples {}", path.display()))
    }

    /// Parses one `x y` pair per line, skipping blank lines.
    pub fn parse(text: &str) -> Result<Self> {
        let mut samples = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [] => {}
                [x, y] => {
                    let parse = |field: &str| {
                        field.parse::<f64>().with_context(|| {
                            format!("line {}: invalid number {field:?}", index + 1)
                        })
                    };
                    samples.push((parse(*x)?, parse(*y)?));
                }
                _ => bail!("line {}: expected two columns, found {}", index + 1, fields.len()),
            }
        }

        Ok(Self::new(samples))
    }

    #[must_use]
    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }
}

impl Objective for PolynomialFit {
    type Error = Infallible;

    fn evaluate(&self, coefficients: &[f64]) -> Result<f64, Self::Error> {
        Ok(self
            .samples
            .iter()
            .map(|&(x, y)| {
                let fit = coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c);
                (y - fit).powi(2)
            })
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rosenbrock_is_zero_at_ones() {
        assert_relative_eq!(Rosenbrock.evaluate(&[1.0, 1.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn rosenbrock_at_default_seed() {
        // 100 (5 - 16)² + 9 + 100 (6 - 25)² + 16
        assert_relative_eq!(Rosenbrock.evaluate(&[4.0, 5.0, 6.0]).unwrap(), 48_225.0);
    }

    #[test]
    fn rosenbrock_of_one_coordinate_is_zero() {
        assert_relative_eq!(Rosenbrock.evaluate(&[3.0]).unwrap(), 0.0);
    }

    #[test]
    fn polynomial_fit_sums_squared_residuals() {
        // y = 1 + 2x exactly, so the residuals of c = [1, 1] are x.
        let fit = PolynomialFit::new(vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);

        assert_relative_eq!(fit.evaluate(&[1.0, 2.0]).unwrap(), 0.0);
        assert_relative_eq!(fit.evaluate(&[1.0, 1.0]).unwrap(), 5.0);
    }

    #[test]
    fn parses_two_column_samples() {
        let fit = PolynomialFit::parse("0 1\n\n1.5\t-2\n  3 4e1  \n").unwrap();

        assert_eq!(fit.samples(), &[(0.0, 1.0), (1.5, -2.0), (3.0, 40.0)]);
    }

    #[test]
    fn rejects_malformed_rows() {
        let err = PolynomialFit::parse("0 1\n2 3 4\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");

        let err = PolynomialFit::parse("0 x\n").unwrap_err();
        assert!(err.to_string().contains("line 1"), "{err}");
    }
}
