//! Capability traits for reusable observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and used with any solver whose types
//! implement them.
//!
//! # Event traits
//!
//! - [`HasCost`]: events that carry the objective value of an evaluation
//! - [`HasPhase`]: events that record which solver step requested them
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanAssumeWorse`]: actions that can reject an evaluated point
//!
//! # Example
//!
//! ```rust
//! use nmfit_core::Observer;
//! use nmfit_observers::traits::{CanStopEarly, HasCost};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasCost, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.cost() < self.target).then(A::stop_early)
//!     }
//! }
//! ```

use std::fmt::Debug;

use nmfit_solvers::optimization::nelder_mead;

/// An event that carries the objective value of an evaluation.
pub trait HasCost {
    /// Returns the raw objective value, which may be NaN or infinite.
    fn cost(&self) -> f64;
}

/// An event that records which solver step requested the evaluation.
pub trait HasPhase {
    /// The solver's step type.
    type Phase: Debug + Copy;

    /// Returns the step that requested this event.
    fn phase(&self) -> Self::Phase;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can reject an evaluated point.
pub trait CanAssumeWorse {
    /// Returns the action that ranks this evaluation behind every finite cost.
    fn assume_worse() -> Self;
}

impl<const N: usize> HasCost for nelder_mead::Event<'_, N> {
    fn cost(&self) -> f64 {
        nelder_mead::Event::cost(self)
    }
}

impl<const N: usize> HasPhase for nelder_mead::Event<'_, N> {
    type Phase = nelder_mead::Phase;

    fn phase(&self) -> Self::Phase {
        nelder_mead::Event::phase(self)
    }
}

impl CanStopEarly for nelder_mead::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for nelder_mead::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nmfit_solvers::optimization::nelder_mead::{Action, Event, Phase, Vertex};

    #[test]
    fn nelder_mead_events_expose_cost_and_phase() {
        let vertex = Vertex::new([1.0, 2.0], 0.5);
        let evaluated = Event::Evaluated {
            vertex: &vertex,
            phase: Phase::Expand,
            best: None,
        };

        assert_eq!(HasCost::cost(&evaluated), 0.5);
        assert_eq!(HasPhase::phase(&evaluated), Phase::Expand);

        let x = [3.0, 4.0];
        let non_finite = Event::NonFinite {
            x: &x,
            cost: f64::NAN,
            phase: Phase::Shrink,
            best: Some(&vertex),
        };

        assert!(HasCost::cost(&non_finite).is_nan());
        assert_eq!(HasPhase::phase(&non_finite), Phase::Shrink);
    }

    #[test]
    fn nelder_mead_actions_are_constructible() {
        assert_eq!(Action::stop_early(), Action::StopEarly);
        assert_eq!(Action::assume_worse(), Action::AssumeWorse);
    }
}
