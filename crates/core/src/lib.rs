//! Core traits and types for nmfit.
//!
//! This crate defines the shared abstractions that the simplex solver and its
//! observers build on:
//!
//! - [`Objective`]: the cost of a parameter vector against read-only problem data
//! - [`Residuals`] and [`SumOfSquares`]: least-squares objectives built from
//!   per-observation residuals
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;
mod residuals;

pub use objective::Objective;
pub use observer::Observer;
pub use residuals::{Residuals, SumOfSquares};
