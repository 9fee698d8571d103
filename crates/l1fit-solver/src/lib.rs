//! Shared solver abstractions for l1fit.
//!
//! This crate provides the types and traits that LP backend implementations
//! (like `l1fit-minilp`) use to integrate with the fitting layer.
//!
//! # Overview
//!
//! - [`SolverStatus`]: Common status values across solvers
//! - [`SolverError`]: Error types for solver operations
//! - [`SolverConfig`]: Backend-independent solver options
//! - [`Solve`]: Trait for solver implementations
//! - [`SolutionView`]: Trait for accessing solution data

mod config;
mod error;
mod status;
mod traits;

pub use config::SolverConfig;
pub use error::SolverError;
pub use status::SolverStatus;
pub use traits::{SolutionView, Solve};
