use super::Error;

/// Indicates how the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the evaluation or iteration limit without converging, or no
    /// vertex with a finite cost remained to make progress from.
    BudgetExhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a simplex search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Coordinates of the best vertex.
    pub x: [f64; N],

    /// Cost of the best vertex.
    ///
    /// Only `f64::INFINITY` when no evaluated point had a finite cost, in
    /// which case `x` should not be used as a result.
    pub cost: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Number of objective evaluations performed.
    pub evals: usize,

    /// Difference between the worst and best costs in the final simplex.
    pub cost_spread: f64,

    /// Largest coordinate distance from the best vertex in the final simplex.
    pub coord_spread: f64,
}

/// Three-valued outcome of [`nmsimplex`](super::nmsimplex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// Converged; the parameters hold the optimum found.
    Converged,

    /// Stopped before converging; the parameters hold the best point found.
    BudgetExhausted,

    /// Rejected before searching; the parameters are unchanged.
    InvalidInput,
}

impl From<Status> for StatusCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Converged => Self::Converged,
            Status::BudgetExhausted | Status::StoppedByObserver => Self::BudgetExhausted,
        }
    }
}

impl<const N: usize> From<&Result<Solution<N>, Error>> for StatusCode {
    fn from(result: &Result<Solution<N>, Error>) -> Self {
        match result {
            Ok(solution) => solution.status.into(),
            Err(_) => Self::InvalidInput,
        }
    }
}
