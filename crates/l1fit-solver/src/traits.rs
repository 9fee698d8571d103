//! Solver traits for abstraction over different LP backends.

use crate::{SolverConfig, SolverError, SolverStatus};

/// Read access to the result of a solve, independent of the backend.
pub trait SolutionView {
    /// Get the objective value of the solution.
    fn objective_value(&self) -> f64;

    /// Get the solver status.
    fn status(&self) -> SolverStatus;

    /// Get the primal value of the variable at the given index.
    fn get_primal(&self, index: usize) -> Option<f64>;

    /// Get all primal values, indexed by variable position.
    fn primal_values(&self) -> &[f64];

    /// Get the solve time in seconds.
    fn solve_time_seconds(&self) -> f64;

    /// Check if the solution is optimal.
    fn is_optimal(&self) -> bool {
        self.status().is_optimal()
    }
}

/// Trait for solver implementations.
///
/// A solver owns its model for the duration of one solve; a fresh solver is
/// constructed per problem instance, so nothing mutable is shared between
/// concurrent solves.
pub trait Solve {
    /// The solution type returned by this solver.
    type Solution: SolutionView;

    /// Solve the model with the given configuration.
    ///
    /// Backends apply the knobs they honor and ignore the rest; `config` is
    /// never a source of errors on its own.
    ///
    /// # Errors
    ///
    /// Returns a `SolverError` if the model is empty, has no objective, or
    /// the solver terminates without an optimal solution.
    fn solve(&mut self, config: &SolverConfig) -> Result<Self::Solution, SolverError>;
}
