use thiserror::Error;

use super::ConfigError;

/// Errors that prevent a simplex search from starting.
///
/// Each is detected before the main loop, and the caller's parameters are
/// never modified when one is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("at least two parameters are required, got {0}")]
    Dimension(usize),

    #[error("initial parameter {index} is not finite: {value}")]
    NonFiniteParameter { index: usize, value: f64 },

    #[error("initial step {index} is not finite: {value}")]
    NonFiniteStep { index: usize, value: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("objective is not finite at the initial point: {0}")]
    NonFiniteInitialCost(f64),
}
