//! Core traits for the Downhill framework.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`]: a scalar function of a real vector, the thing solvers minimize
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! Adapters:
//!
//! - [`Pure`]: wraps an infallible function as an [`Objective`]
//! - [`Negate`]: flips the sign of an objective so maximization can reuse a minimizer

mod objective;
mod observer;

pub use objective::{Negate, Objective, Pure};
pub use observer::Observer;
