//! Numerical solvers for nmfit.
//!
//! The [`optimization::nelder_mead`] module holds the simplex search itself.
//! [`nmsimplex`] is its fixed-contract entry point: it overwrites a parameter
//! vector with the best point found and returns a [`StatusCode`].

pub mod optimization;

pub use optimization::nelder_mead::{StatusCode, nmsimplex};
