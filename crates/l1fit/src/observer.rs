//! Formulation and solve milestone hooks.
//!
//! Formulation logic is a pure data transform and never prints; milestones
//! are surfaced through this observer instead so callers can attach logging
//! or progress reporting without touching the builders.

use l1fit_solver::SolverStatus;
use tracing::debug;

/// Receives milestones of one formulate-solve-extract cycle.
///
/// All hooks have empty default bodies; implement only what you need.
pub trait FitObserver {
    /// Decision variables allocated: coefficient count, deviation count.
    fn variables_created(&mut self, coefficients: usize, deviations: usize) {
        let _ = (coefficients, deviations);
    }

    /// Objective assembled over the given number of terms.
    fn objective_built(&mut self, terms: usize) {
        let _ = terms;
    }

    /// One equality constraint per point assembled.
    fn constraints_built(&mut self, constraints: usize) {
        let _ = constraints;
    }

    /// The external solver is about to run.
    fn solve_started(&mut self, variables: usize, constraints: usize) {
        let _ = (variables, constraints);
    }

    /// The external solver finished with the given status.
    fn solve_finished(&mut self, status: SolverStatus, objective: f64, seconds: f64) {
        let _ = (status, objective, seconds);
    }
}

/// Observer that ignores every milestone.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl FitObserver for NullObserver {}

/// Observer that forwards milestones to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FitObserver for TracingObserver {
    fn variables_created(&mut self, coefficients: usize, deviations: usize) {
        debug!(
            component = "fit",
            operation = "build_variables",
            status = "success",
            coefficients,
            deviations,
            "Allocated decision variables"
        );
    }

    fn objective_built(&mut self, terms: usize) {
        debug!(
            component = "fit",
            operation = "build_objective",
            status = "success",
            terms,
            "Built minimization objective"
        );
    }

    fn constraints_built(&mut self, constraints: usize) {
        debug!(
            component = "fit",
            operation = "build_constraints",
            status = "success",
            constraints,
            "Built point equality constraints"
        );
    }

    fn solve_started(&mut self, variables: usize, constraints: usize) {
        debug!(
            component = "fit",
            operation = "solve",
            status = "started",
            variables,
            constraints,
            "Invoking LP solver"
        );
    }

    fn solve_finished(&mut self, status: SolverStatus, objective: f64, seconds: f64) {
        debug!(
            component = "fit",
            operation = "solve",
            status = status.as_str(),
            objective,
            duration_ms = seconds * 1000.0,
            "LP solver finished"
        );
    }
}
