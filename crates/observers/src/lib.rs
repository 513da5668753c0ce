//! Reusable observers for nmfit.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose event and action types implement them.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for reusable observers
//!   ([`HasCost`], [`HasPhase`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`LogObserver`]: reports every evaluation through the `log` facade
//! - [`Stall`]: stops a search whose best cost has stopped improving
//!
//! [`Observer`]: nmfit_core::Observer
//! [`HasCost`]: traits::HasCost
//! [`HasPhase`]: traits::HasPhase
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod logging;
mod stall;

pub use logging::LogObserver;
pub use stall::Stall;
