//! Bridge from the l1fit model to the `minilp` simplex solver.
//!
//! This crate lowers an [`l1fit_core::Model`] into a `minilp::Problem`,
//! runs the solve, and exposes the result through the solver-agnostic
//! [`l1fit_solver::SolutionView`] trait.

pub mod solution;
pub mod solver;

pub use solution::Solution;
pub use solver::Solver;
