//! An observer that stops a search once its best cost stops improving.

use nmfit_core::Observer;

use crate::traits::{CanStopEarly, HasCost};

/// Stops the search after `patience` consecutive evaluations that fail to
/// lower the best cost by more than `min_improvement`.
///
/// The best cost is tracked from the events themselves, so a stall counts
/// evaluations, not solver iterations. Non-finite costs never improve it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stall {
    patience: usize,
    min_improvement: f64,
    best: f64,
    stalled: usize,
}

impl Stall {
    /// Creates a stall detector.
    ///
    /// A `patience` of zero stops on the first evaluation.
    #[must_use]
    pub fn new(patience: usize, min_improvement: f64) -> Self {
        Self {
            patience,
            min_improvement,
            best: f64::INFINITY,
            stalled: 0,
        }
    }

    /// Lowest finite cost observed, or `f64::INFINITY` if none.
    #[must_use]
    pub fn best(&self) -> f64 {
        self.best
    }

    /// Consecutive evaluations since the last significant improvement.
    #[must_use]
    pub fn stalled(&self) -> usize {
        self.stalled
    }
}

impl<E, A> Observer<E, A> for Stall
where
    E: HasCost,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let cost = event.cost();

        if cost.is_finite() && self.best - cost > self.min_improvement {
            self.stalled = 0;
        } else {
            self.stalled += 1;
        }
        if cost.is_finite() && cost < self.best {
            self.best = cost;
        }

        (self.stalled >= self.patience).then(A::stop_early)
    }
}

impl<E, A> Observer<E, A> for &mut Stall
where
    E: HasCost,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
