//! Reusable observers for the Downhill framework.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they are written against, so the same observer can watch any solver whose
//! events and actions implement those traits.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasObjective`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Deadline`]: stops the solver once a wall-clock budget has elapsed
//! - [`History`]: records the best objective value after each iteration
//! - [`Trace`]: logs each event through `tracing`
//!
//! [`Observer`]: downhill_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod deadline;
mod history;
mod trace;

pub use deadline::Deadline;
pub use history::History;
pub use trace::Trace;
