//! An observer that reports solver events through the `log` facade.

use log::{debug, trace};
use nmfit_core::Observer;

use crate::traits::{HasCost, HasPhase};

/// Logs every evaluation at `trace` level and non-finite costs at `debug`.
///
/// Each record is prefixed with a label, so concurrent searches over several
/// problem instances can share one logger. The observer never steers the
/// search.
///
/// Pass `&mut LogObserver` to keep access to [`LogObserver::evals`] after
/// the search completes.
#[derive(Debug, Clone)]
pub struct LogObserver<'a> {
    label: &'a str,
    evals: usize,
    non_finite: usize,
}

impl<'a> LogObserver<'a> {
    /// Creates an observer whose log records start with `label`.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            evals: 0,
            non_finite: 0,
        }
    }

    /// Number of events observed.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }

    /// Number of observed events with a non-finite cost.
    #[must_use]
    pub fn non_finite(&self) -> usize {
        self.non_finite
    }
}

impl<E, A> Observer<E, A> for LogObserver<'_>
where
    E: HasCost + HasPhase,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.evals += 1;
        let cost = event.cost();
        let phase = event.phase();

        if cost.is_finite() {
            trace!("{}: eval {} ({phase:?}) cost {cost:e}", self.label, self.evals);
        } else {
            self.non_finite += 1;
            debug!(
                "{}: eval {} ({phase:?}) returned non-finite cost {cost}",
                self.label, self.evals
            );
        }
        None
    }
}

impl<E, A> Observer<E, A> for &mut LogObserver<'_>
where
    E: HasCost + HasPhase,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
