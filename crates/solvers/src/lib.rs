//! Numerical solvers for the Downhill framework.
//!
//! - [`optimization`]: minimizing (or maximizing) an [`Objective`]
//!
//! [`Objective`]: downhill_core::Objective

pub mod optimization;
