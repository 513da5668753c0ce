use log::{debug, trace};
use nmfit_core::{Objective, Observer};

use super::{
    Action, Coefficients, Config, Error, Event, Phase, Solution, Status, Vertex,
    evaluator::{Evaluator, Outcome},
    init::{InitResult, init},
    simplex::{Simplex, affine},
};

/// Core Nelder-Mead implementation.
///
/// When `steps` is `None`, the initial simplex offsets come from
/// [`Config::steps`].
pub(super) fn search<D, F, Obs, const N: usize>(
    data: &D,
    objective: &F,
    x0: [f64; N],
    steps: Option<&[f64; N]>,
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    D: ?Sized,
    F: Objective<D, N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    let steps = validate(x0, steps, config)?;
    let coefficients = config.coefficients.resolve(N);
    let max_iters = config.max_iters.resolve(N);

    let mut evaluator = Evaluator::new(data, objective, observer, config.max_evals.resolve(N));

    let mut simplex = match init(&mut evaluator, x0, &steps)? {
        InitResult::Continue(simplex) => simplex,
        InitResult::Halt(simplex, status) => {
            return Ok(finish(&simplex, status, 0, evaluator.evals()));
        }
    };

    // Every vertex was rejected; there is nothing to move toward.
    if !simplex.best().is_finite() {
        return Ok(finish(&simplex, Status::BudgetExhausted, 0, evaluator.evals()));
    }

    for iter in 1..=max_iters {
        if simplex.is_converged(config) {
            return Ok(finish(&simplex, Status::Converged, iter - 1, evaluator.evals()));
        }

        match advance(&mut simplex, &mut evaluator, &coefficients) {
            Advance::Moved(phase) => {
                trace!(
                    "iter {iter}: {phase:?}, best cost {:e}, spread {:e}",
                    simplex.best().cost,
                    simplex.cost_spread(),
                );
            }
            Advance::Halted(status) => {
                return Ok(finish(&simplex, status, iter, evaluator.evals()));
            }
        }
    }

    let status = if simplex.is_converged(config) {
        Status::Converged
    } else {
        Status::BudgetExhausted
    };
    Ok(finish(&simplex, status, max_iters, evaluator.evals()))
}

/// Checks the inputs and resolves the initial simplex offsets.
fn validate<const N: usize>(
    x0: [f64; N],
    steps: Option<&[f64; N]>,
    config: &Config,
) -> Result<[f64; N], Error> {
    if N < 2 {
        return Err(Error::Dimension(N));
    }

    config.validate()?;

    if let Some((index, &value)) = x0.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(Error::NonFiniteParameter { index, value });
    }

    let steps = steps.copied().unwrap_or_else(|| config.steps(&x0));
    if let Some((index, &value)) = steps.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(Error::NonFiniteStep { index, value });
    }

    Ok(steps)
}

fn finish<const N: usize>(
    simplex: &Simplex<N>,
    status: Status,
    iters: usize,
    evals: usize,
) -> Solution<N> {
    let best = simplex.best();
    let solution = Solution {
        status,
        x: best.x,
        cost: best.cost,
        iters,
        evals,
        cost_spread: simplex.cost_spread(),
        coord_spread: simplex.coord_spread(),
    };

    debug!(
        "nelder-mead finished: {status:?} after {iters} iters and {evals} evals, cost {:e}",
        solution.cost,
    );

    solution
}

/// How an iteration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    /// The simplex changed by the given move.
    Moved(Phase),

    /// The search must stop.
    Halted(Status),
}

/// Performs one Nelder-Mead iteration on a sorted simplex.
///
/// Leaves the simplex sorted, including when the search halts partway.
fn advance<D, F, Obs, const N: usize>(
    simplex: &mut Simplex<N>,
    evaluator: &mut Evaluator<'_, D, F, Obs>,
    coefficients: &Coefficients,
) -> Advance
where
    D: ?Sized,
    F: Objective<D, N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    let best = *simplex.best();
    let worst = *simplex.worst();
    let second_worst_cost = simplex.second_worst().cost;
    let centroid = simplex.centroid();

    let reflected = affine(&centroid, &worst.x, -coefficients.reflection);
    let reflected = match evaluator.evaluate(reflected, Phase::Reflect, Some(&best)) {
        Outcome::Ranked { vertex, .. } => vertex,
        Outcome::Halt(status) => return Advance::Halted(status),
    };

    // A halt after reflecting still keeps the reflected vertex if it helps.
    let halted = |simplex: &mut Simplex<N>, status| {
        simplex.accept_if_better(reflected);
        Advance::Halted(status)
    };

    if reflected.cost < best.cost {
        let expanded = affine(&centroid, &reflected.x, coefficients.expansion);
        return match evaluator.evaluate(expanded, Phase::Expand, Some(&best)) {
            Outcome::Ranked { vertex, .. } if vertex.cost < reflected.cost => {
                simplex.replace_worst(vertex);
                Advance::Moved(Phase::Expand)
            }
            Outcome::Ranked { .. } => {
                simplex.replace_worst(reflected);
                Advance::Moved(Phase::Reflect)
            }
            Outcome::Halt(status) => halted(simplex, status),
        };
    }

    if reflected.cost < second_worst_cost {
        simplex.replace_worst(reflected);
        return Advance::Moved(Phase::Reflect);
    }

    if reflected.cost < worst.cost {
        let contracted = affine(&centroid, &reflected.x, coefficients.contraction);
        match evaluator.evaluate(contracted, Phase::ContractOutside, Some(&best)) {
            Outcome::Ranked { vertex, .. } if vertex.cost <= reflected.cost => {
                simplex.replace_worst(vertex);
                return Advance::Moved(Phase::ContractOutside);
            }
            Outcome::Ranked { .. } => {}
            Outcome::Halt(status) => return halted(simplex, status),
        }
    } else {
        let contracted = affine(&centroid, &worst.x, coefficients.contraction);
        match evaluator.evaluate(contracted, Phase::ContractInside, Some(&best)) {
            Outcome::Ranked { vertex, .. } if vertex.cost < worst.cost => {
                simplex.replace_worst(vertex);
                return Advance::Moved(Phase::ContractInside);
            }
            Outcome::Ranked { .. } => {}
            Outcome::Halt(status) => return halted(simplex, status),
        }
    }

    shrink(simplex, evaluator, &best, coefficients.shrink)
}

/// Pulls every vertex except the best toward the best vertex.
fn shrink<D, F, Obs, const N: usize>(
    simplex: &mut Simplex<N>,
    evaluator: &mut Evaluator<'_, D, F, Obs>,
    best: &Vertex<N>,
    sigma: f64,
) -> Advance
where
    D: ?Sized,
    F: Objective<D, N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    for index in 1..=N {
        let x = affine(&best.x, &simplex.vertex(index).x, sigma);
        match evaluator.evaluate(x, Phase::Shrink, Some(best)) {
            Outcome::Ranked { vertex, .. } => simplex.set(index, vertex),
            Outcome::Halt(status) => {
                simplex.sort();
                return Advance::Halted(status);
            }
        }
    }

    simplex.sort();
    Advance::Moved(Phase::Shrink)
}
