use nmfit_core::{Objective, Observer};

use super::{
    Action, Error, Event, Phase, Status, Vertex,
    evaluator::{Evaluator, Outcome},
    simplex::Simplex,
};

pub(super) enum InitResult<const N: usize> {
    Continue(Simplex<N>),
    Halt(Simplex<N>, Status),
}

/// Builds the initial simplex around `x0`.
///
/// Vertex `i + 1` is `x0` offset by `steps[i]` along coordinate `i`. The
/// initial point is evaluated first; a non-finite objective there is an
/// error, since there is no reference cost to search from.
///
/// If the search must stop partway through, the vertices not yet evaluated
/// remain copies of the initial vertex, so the partial simplex stays valid.
pub(super) fn init<D, F, Obs, const N: usize>(
    evaluator: &mut Evaluator<'_, D, F, Obs>,
    x0: [f64; N],
    steps: &[f64; N],
) -> Result<InitResult<N>, Error>
where
    D: ?Sized,
    F: Objective<D, N>,
    Obs: for<'e> Observer<Event<'e, N>, Action>,
{
    let v0 = match evaluator.evaluate(x0, Phase::Initial, None) {
        Outcome::Ranked { cost, .. } if !cost.is_finite() => {
            return Err(Error::NonFiniteInitialCost(cost));
        }
        Outcome::Ranked { vertex, .. } => vertex,
        Outcome::Halt(status) => {
            return Ok(InitResult::Halt(Simplex::uniform(Vertex::worse(x0)), status));
        }
    };

    let mut simplex = Simplex::uniform(v0);
    let mut best = v0;

    for (i, step) in steps.iter().enumerate() {
        let mut x = x0;
        x[i] += step;

        let seen = best.is_finite().then_some(&best);
        match evaluator.evaluate(x, Phase::Initial, seen) {
            Outcome::Ranked { vertex, .. } => {
                if vertex.cost < best.cost {
                    best = vertex;
                }
                simplex.set(i + 1, vertex);
            }
            Outcome::Halt(status) => {
                simplex.sort();
                return Ok(InitResult::Halt(simplex, status));
            }
        }
    }

    simplex.sort();
    Ok(InitResult::Continue(simplex))
}
