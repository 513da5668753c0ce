//! Nelder-Mead simplex search for multi-parameter optimization.
//!
//! # Algorithm
//!
//! The search keeps N+1 vertices sorted by cost. Each iteration reflects the
//! worst vertex through the centroid of the others, then expands, contracts
//! or shrinks the simplex depending on how the reflected point compares with
//! the best, second-worst and worst vertices. The search converges once the
//! simplex is small in both cost and coordinates.
//!
//! All solver state lives in fixed-size arrays sized by `N`, so a search
//! never allocates. Independent searches can run concurrently, one per
//! problem instance, sharing the same read-only data.
//!
//! # When to Use
//!
//! Nelder-Mead is appropriate when:
//! - The objective is cheap but derivatives are unavailable or unreliable
//! - There are a handful of parameters; the default budgets are sized for
//!   about 4 or fewer, so raise `max_evals` and `max_iters` beyond that
//! - The objective may be undefined in places (non-finite costs are tolerated)
//!
//! # Limitations
//!
//! - **Local only**: Converges to a nearby minimum, not a global one
//! - **At least two parameters**: Use a bracketing method for one
//! - **No convergence guarantee**: The simplex can stall on badly scaled
//!   problems
//! - **Collapse in higher dimensions**: With the standard coefficients the
//!   simplex can collapse onto a non-optimal point once there are more than
//!   about 4 parameters; use [`CoefficientScheme::Adaptive`] there
//!
//! # Non-finite Costs
//!
//! NaN and infinite objective values rank behind every finite cost. Such a
//! point is never accepted as the best vertex, so the search moves away from
//! regions where the objective is undefined. The initial point itself must
//! have a finite cost.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per objective evaluation, including the
//! evaluations that build the initial simplex:
//!
//! - [`Event::Evaluated`]: the objective returned a finite cost
//! - [`Event::NonFinite`]: the objective returned NaN or an infinity
//!
//! Each event carries the [`Phase`] that requested it and the current best
//! vertex. Observers can return [`Action::StopEarly`] to halt with the best
//! vertex so far, or [`Action::AssumeWorse`] to rank the point behind every
//! finite cost.
//!
//! # Example
//!
//! ```
//! use nmfit_solvers::optimization::nelder_mead::{Config, Status, minimize_unobserved};
//!
//! let target = [3.0, -1.0];
//! let distance = |x: &[f64; 2], target: &[f64; 2]| {
//!     (x[0] - target[0]).powi(2) + (x[1] - target[1]).powi(2)
//! };
//!
//! let solution = minimize_unobserved([0.0, 0.0], &target, distance, &Config::default())?;
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x[0] - 3.0).abs() < 1e-5);
//! assert!((solution.x[1] + 1.0).abs() < 1e-5);
//! # Ok::<(), nmfit_solvers::optimization::nelder_mead::Error>(())
//! ```

mod action;
mod budget;
mod coefficients;
mod config;
mod error;
mod evaluator;
mod event;
mod init;
mod search;
mod simplex;
mod solution;
mod vertex;


pub use action::Action;
pub use budget::Budget;
pub use coefficients::{CoefficientScheme, Coefficients};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Phase};
pub use solution::{Solution, Status, StatusCode};
pub use vertex::Vertex;

use nmfit_core::{Objective, Observer};

use super::NegateObjective;
use search::search;

/// Finds a minimum of the objective starting from `x0`.
///
/// The initial simplex offsets each coordinate by [`Config::steps`].
/// The observer receives an [`Event`] for every evaluation.
///
/// # Errors
///
/// Returns an error if `N < 2`, the config is invalid, `x0` or the derived
/// steps are not finite, or the objective is not finite at `x0`.
pub fn minimize<D, F, Obs, const N: usize>(
    x0: [f64; N],
    data: &D,
    objective: F,
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    D: ?Sized,
    F: Objective<D, N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    search(data, &objective, x0, None, config, observer)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `N < 2`, the config is invalid, `x0` or the derived
/// steps are not finite, or the objective is not finite at `x0`.
pub fn minimize_unobserved<D, F, const N: usize>(
    x0: [f64; N],
    data: &D,
    objective: F,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    D: ?Sized,
    F: Objective<D, N>,
{
    minimize(x0, data, objective, config, ())
}

/// Finds a minimum of the objective using explicit initial simplex offsets.
///
/// Vertex `i + 1` of the initial simplex is `x0` with `steps[i]` added to
/// coordinate `i`. Use this when parameters have very different natural
/// scales. [`Config::initial_step`] and [`Config::zero_step`] are ignored.
///
/// # Errors
///
/// Returns an error if `N < 2`, the config is invalid, `x0` or `steps` are
/// not finite, or the objective is not finite at `x0`.
pub fn minimize_with_steps<D, F, Obs, const N: usize>(
    x0: [f64; N],
    steps: [f64; N],
    data: &D,
    objective: F,
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    D: ?Sized,
    F: Objective<D, N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    search(data, &objective, x0, Some(&steps), config, observer)
}

/// Finds a maximum of the objective starting from `x0`.
///
/// The search minimizes the negated objective, so observers see negated
/// costs. The returned [`Solution::cost`] is the objective value itself.
///
/// # Errors
///
/// Returns an error if `N < 2`, the config is invalid, `x0` or the derived
/// steps are not finite, or the objective is not finite at `x0`.
pub fn maximize<D, F, Obs, const N: usize>(
    x0: [f64; N],
    data: &D,
    objective: F,
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    D: ?Sized,
    F: Objective<D, N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    let mut solution = minimize(x0, data, NegateObjective(objective), config, observer)?;
    if solution.cost.is_finite() {
        solution.cost = -solution.cost;
    }
    Ok(solution)
}

/// Finds a maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `N < 2`, the config is invalid, `x0` or the derived
/// steps are not finite, or the objective is not finite at `x0`.
pub fn maximize_unobserved<D, F, const N: usize>(
    x0: [f64; N],
    data: &D,
    objective: F,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    D: ?Sized,
    F: Objective<D, N>,
{
    maximize(x0, data, objective, config, ())
}

/// Minimizes the objective in place, starting from `params`.
///
/// On return, `params` holds the best point found, unless the inputs were
/// rejected or no evaluated point had a finite cost, in which case `params`
/// is left unchanged. Runs without an observer.
pub fn nmsimplex<D, F, const N: usize>(
    params: &mut [f64; N],
    data: &D,
    objective: F,
    config: &Config,
) -> StatusCode
where
    D: ?Sized,
    F: Objective<D, N>,
{
    let result = minimize_unobserved(*params, data, objective, config);
    if let Ok(solution) = &result
        && solution.cost.is_finite()
    {
        *params = solution.x;
    }
    StatusCode::from(&result)
}
