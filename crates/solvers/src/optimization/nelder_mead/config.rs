use thiserror::Error;

use super::{Budget, CoefficientScheme};

/// Configuration for the Nelder-Mead solver.
///
/// The defaults suit fitting problems with a handful of parameters: up to
/// `200 · N` evaluations and iterations, convergence once the simplex spans
/// less than `1e-10` in cost and `1e-6` in every coordinate, and an initial
/// simplex offset by 5% of each coordinate (or `2.5e-4` for coordinates at or
/// near zero).
///
/// Fields are public and checked when a search starts: a malformed config is
/// returned as [`Error::InvalidConfig`](super::Error::InvalidConfig), which
/// [`nmsimplex`](super::nmsimplex) reports as `StatusCode::InvalidInput`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of objective evaluations, including initialization.
    pub max_evals: Budget,

    /// Maximum number of iterations after initialization.
    pub max_iters: Budget,

    /// Converged once `worst.cost - best.cost` is at most this value.
    pub cost_tol: f64,

    /// Converged once every vertex lies within this distance of the best
    /// vertex in every coordinate.
    pub coord_tol: f64,

    /// Initial simplex offset, relative to each coordinate's magnitude.
    pub initial_step: f64,

    /// Smallest initial simplex offset, used for coordinates at or near zero.
    pub zero_step: f64,

    /// Move coefficients.
    pub coefficients: CoefficientScheme,
}

/// Errors that can occur when validating a Nelder-Mead config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_evals must allow at least one evaluation")]
    MaxEvals,

    #[error("max_iters must allow at least one iteration")]
    MaxIters,

    #[error("cost_tol must be finite and positive")]
    CostTol,

    #[error("coord_tol must be finite and positive")]
    CoordTol,

    #[error("initial_step must be finite and non-negative")]
    InitialStep,

    #[error("zero_step must be finite and non-negative")]
    ZeroStep,

    #[error("reflection coefficient must be finite and positive")]
    Reflection,

    #[error("expansion coefficient must be finite and exceed both one and the reflection coefficient")]
    Expansion,

    #[error("contraction coefficient must lie strictly between zero and one")]
    Contraction,

    #[error("shrink coefficient must lie strictly between zero and one")]
    Shrink,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_evals: Budget::PerParameter(200),
            max_iters: Budget::PerParameter(200),
            cost_tol: 1e-10,
            coord_tol: 1e-6,
            initial_step: 0.05,
            zero_step: 2.5e-4,
            coefficients: CoefficientScheme::Standard,
        }
    }
}

impl Config {
    /// Validates budgets, tolerances, steps and custom coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if a budget is zero, a tolerance is not finite and
    /// positive, a step is negative or non-finite, or custom coefficients are
    /// out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_evals.is_empty() {
            return Err(ConfigError::MaxEvals);
        }
        if self.max_iters.is_empty() {
            return Err(ConfigError::MaxIters);
        }
        if !self.cost_tol.is_finite() || self.cost_tol <= 0.0 {
            return Err(ConfigError::CostTol);
        }
        if !self.coord_tol.is_finite() || self.coord_tol <= 0.0 {
            return Err(ConfigError::CoordTol);
        }
        if !self.initial_step.is_finite() || self.initial_step < 0.0 {
            return Err(ConfigError::InitialStep);
        }
        if !self.zero_step.is_finite() || self.zero_step < 0.0 {
            return Err(ConfigError::ZeroStep);
        }
        if let CoefficientScheme::Custom(coefficients) = &self.coefficients {
            coefficients.validate()?;
        }
        Ok(())
    }

    /// Returns the initial simplex offset for each coordinate of `x`.
    ///
    /// Each offset is `initial_step · |x_i|`, floored at `zero_step`.
    #[must_use]
    pub fn steps<const N: usize>(&self, x: &[f64; N]) -> [f64; N] {
        x.map(|xi| (self.initial_step * xi.abs()).max(self.zero_step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::optimization::nelder_mead::Coefficients;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_budgets() {
        let config = Config {
            max_evals: Budget::Fixed(0),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MaxEvals));

        let config = Config {
            max_iters: Budget::Patience(0),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MaxIters));
    }

    #[test]
    fn rejects_non_positive_tolerances() {
        for cost_tol in [0.0, -1e-8, f64::NAN, f64::INFINITY] {
            let config = Config {
                cost_tol,
                ..Config::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::CostTol));
        }

        for coord_tol in [0.0, -1e-8, f64::NAN] {
            let config = Config {
                coord_tol,
                ..Config::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::CoordTol));
        }
    }

    #[test]
    fn zero_steps_are_allowed() {
        let config = Config {
            initial_step: 0.0,
            zero_step: 0.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_invalid_steps() {
        let config = Config {
            initial_step: -0.1,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InitialStep));

        let config = Config {
            zero_step: f64::NAN,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStep));
    }

    #[test]
    fn validates_custom_coefficients() {
        let config = Config {
            coefficients: CoefficientScheme::Custom(Coefficients {
                shrink: 1.5,
                ..Coefficients::STANDARD
            }),
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Shrink));
    }

    #[test]
    fn steps_scale_with_magnitude_and_floor_at_zero_step() {
        let config = Config::default();
        let steps = config.steps(&[10.0, -4.0, 0.0, 1e-6]);

        assert_relative_eq!(steps[0], 0.5);
        assert_relative_eq!(steps[1], 0.2);
        assert_relative_eq!(steps[2], 2.5e-4);
        assert_relative_eq!(steps[3], 2.5e-4);
    }
}
