use nmfit_core::{Objective, Observer};

use super::{Action, Event, Phase, Status, Vertex};

/// The result of requesting one evaluation.
pub(super) enum Outcome<const N: usize> {
    /// The point was evaluated and ranked.
    Ranked {
        /// The ranked vertex.
        vertex: Vertex<N>,

        /// The raw objective value.
        cost: f64,
    },

    /// The search must stop without using the point.
    Halt(Status),
}

/// Evaluates points against the objective, enforcing the evaluation budget
/// and routing every evaluation through the observer.
pub(super) struct Evaluator<'a, D: ?Sized, F, Obs> {
    data: &'a D,
    objective: &'a F,
    observer: Obs,
    evals: usize,
    max_evals: usize,
}

impl<'a, D, F, Obs> Evaluator<'a, D, F, Obs>
where
    D: ?Sized,
{
    pub(super) fn new(data: &'a D, objective: &'a F, observer: Obs, max_evals: usize) -> Self {
        Self {
            data,
            objective,
            observer,
            evals: 0,
            max_evals,
        }
    }

    /// Number of evaluations performed so far.
    pub(super) fn evals(&self) -> usize {
        self.evals
    }

    /// Evaluates `x`, unless the budget is spent or the observer stops.
    ///
    /// An evaluation that would exceed the budget is never performed.
    pub(super) fn evaluate<const N: usize>(
        &mut self,
        x: [f64; N],
        phase: Phase,
        best: Option<&Vertex<N>>,
    ) -> Outcome<N>
    where
        F: Objective<D, N>,
        Obs: for<'e> Observer<Event<'e, N>, Action>,
    {
        if self.evals >= self.max_evals {
            return Outcome::Halt(Status::BudgetExhausted);
        }
        self.evals += 1;

        let cost = self.objective.cost(&x, self.data);
        let vertex = Vertex::new(x, cost);

        let action = if vertex.is_finite() {
            let event = Event::Evaluated {
                vertex: &vertex,
                phase,
                best,
            };
            self.observer.observe(&event)
        } else {
            let event = Event::NonFinite {
                x: &x,
                cost,
                phase,
                best,
            };
            self.observer.observe(&event)
        };

        match action {
            Some(Action::StopEarly) => Outcome::Halt(Status::StoppedByObserver),
            Some(Action::AssumeWorse) => Outcome::Ranked {
                vertex: Vertex::worse(x),
                cost,
            },
            None => Outcome::Ranked { vertex, cost },
        }
    }
}
