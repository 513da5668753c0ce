//! Solvers for optimization problems: minimizing or maximizing an objective.
//!
//! An [`Objective`] maps parameters `x: [f64; N]` and a read-only data record
//! to a scalar cost. Solvers in this module search for the `x` that minimizes
//! or maximizes that cost.
//!
//! # Solvers
//!
//! - [`nelder_mead`]: derivative-free simplex search over `N >= 2` parameters,
//!   with fixed-size state and no heap allocation
//!
//! [`Objective`]: nmfit_core::Objective

mod negate;

pub use negate::NegateObjective;

pub mod nelder_mead;
