//! Solution type and trait implementations.

use l1fit_solver::{SolutionView, SolverStatus};

/// Solution from the minilp backend.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Primal values of variables indexed by their position in the model.
    pub(crate) primal_values: Vec<f64>,
    /// Objective value of the solution.
    pub(crate) objective_value: f64,
    /// Status of the solution.
    pub(crate) status: SolverStatus,
    /// Solve time in seconds.
    pub(crate) solve_time_seconds: f64,
}

impl Solution {
    /// Get the primal value of the variable at the given index.
    pub fn get_primal(&self, index: usize) -> Option<f64> {
        self.primal_values.get(index).copied()
    }

    /// Get the objective value.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Get all primal values.
    pub fn primal_values(&self) -> &[f64] {
        &self.primal_values
    }

    /// Get the solver status.
    pub fn status(&self) -> SolverStatus {
        self.status
    }

    /// Get the solve time in seconds.
    pub fn solve_time_seconds(&self) -> f64 {
        self.solve_time_seconds
    }
}

impl SolutionView for Solution {
    fn objective_value(&self) -> f64 {
        self.objective_value
    }

    fn status(&self) -> SolverStatus {
        self.status
    }

    fn get_primal(&self, index: usize) -> Option<f64> {
        self.primal_values.get(index).copied()
    }

    fn primal_values(&self) -> &[f64] {
        &self.primal_values
    }

    fn solve_time_seconds(&self) -> f64 {
        self.solve_time_seconds
    }
}
