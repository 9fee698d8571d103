//! Lowering of a model into minilp and solve orchestration.

use crate::solution::Solution;
use l1fit_core::{ConstraintId, Model, Sense, VariableId};
use l1fit_solver::{Solve, SolverConfig, SolverError, SolverStatus};
use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::debug;

/// Bridge from an [`l1fit_core::Model`] to the minilp simplex solver.
///
/// The solver owns the model for the duration of solving; construct one
/// solver per problem instance.
pub struct Solver {
    model: Model,
}

impl Solver {
    /// Create a new solver from a model.
    pub fn new(model: Model) -> Result<Self, SolverError> {
        validate_model(&model)?;

        debug!(
            component = "solver",
            operation = "init",
            status = "success",
            variables = model.num_variables() as u64,
            constraints = model.num_constraints() as u64,
            nnz = model.num_coefficients() as u64,
            "Creating minilp solver from model"
        );

        Ok(Solver { model })
    }

    /// Read access to the owned model.
    pub fn model(&self) -> &Model {
        &self.model
    }
}

fn validate_model(model: &Model) -> Result<(), SolverError> {
    if model.num_variables() == 0 {
        return Err(SolverError::EmptyModel);
    }
    if model.objective().sense.is_none() {
        return Err(SolverError::NoObjective);
    }
    Ok(())
}

impl Solve for Solver {
    type Solution = Solution;

    /// minilp exposes no tunable parameters, so every [`SolverConfig`] knob
    /// (time limit, verbosity, tolerance) is ignored here; a non-empty
    /// config is noted in the debug log.
    fn solve(&mut self, config: &SolverConfig) -> Result<Solution, SolverError> {
        let started = Instant::now();

        if !config.is_empty() {
            debug!(
                component = "solver",
                operation = "solve",
                status = "ignored_config",
                ?config,
                "minilp has no tunable parameters; config knobs ignored"
            );
        }

        let direction = match self.model.objective().sense {
            Some(Sense::Minimize) => OptimizationDirection::Minimize,
            Some(Sense::Maximize) => OptimizationDirection::Maximize,
            None => return Err(SolverError::NoObjective),
        };
        let mut problem = Problem::new(direction);

        // minilp takes objective weights at variable creation time.
        let weights: BTreeMap<VariableId, f64> =
            self.model.objective().terms.iter().copied().collect();

        // Variable ids are dense and insertion-ordered, so position in this
        // vec equals the id's raw index.
        let mut lp_vars = Vec::with_capacity(self.model.num_variables());
        for (id, variable) in self.model.variables() {
            let weight = weights.get(&id).copied().unwrap_or(0.0);
            let lp_var = problem.add_var(weight, (variable.bounds.lower, variable.bounds.upper));
            lp_vars.push(lp_var);
        }

        // Transpose the column-first storage into per-row expressions.
        let mut rows: BTreeMap<ConstraintId, LinearExpr> = BTreeMap::new();
        for (var_id, _) in self.model.variables() {
            let Some(column) = self.model.get_column(var_id) else {
                continue;
            };
            for (con_id, coefficient) in column {
                rows.entry(*con_id)
                    .or_insert_with(LinearExpr::empty)
                    .add(lp_vars[var_id.inner() as usize], *coefficient);
            }
        }

        for (con_id, constraint) in self.model.constraints() {
            let expr = rows.remove(&con_id).unwrap_or_else(LinearExpr::empty);
            let lower = constraint.bounds.lower;
            let upper = constraint.bounds.upper;
            if lower == upper {
                problem.add_constraint(expr, ComparisonOp::Eq, lower);
            } else {
                // Ranged rows become a Ge/Le pair; fully free rows are dropped.
                if lower.is_finite() {
                    problem.add_constraint(expr.clone(), ComparisonOp::Ge, lower);
                }
                if upper.is_finite() {
                    problem.add_constraint(expr, ComparisonOp::Le, upper);
                }
            }
        }

        debug!(
            component = "solver",
            operation = "solve",
            status = "started",
            variables = self.model.num_variables() as u64,
            constraints = self.model.num_constraints() as u64,
            "Running minilp simplex"
        );

        match problem.solve() {
            Ok(lp_solution) => {
                let primal_values: Vec<f64> =
                    lp_vars.iter().map(|var| lp_solution[*var]).collect();
                let solution = Solution {
                    primal_values,
                    objective_value: lp_solution.objective(),
                    status: SolverStatus::Optimal,
                    solve_time_seconds: started.elapsed().as_secs_f64(),
                };
                debug!(
                    component = "solver",
                    operation = "solve",
                    status = "success",
                    objective = solution.objective_value(),
                    duration_ms = solution.solve_time_seconds() * 1000.0,
                    "Solve finished"
                );
                Ok(solution)
            }
            Err(minilp::Error::Infeasible) => Err(SolverError::SolveFailure {
                status: SolverStatus::Infeasible,
            }),
            Err(minilp::Error::Unbounded) => Err(SolverError::SolveFailure {
                status: SolverStatus::Unbounded,
            }),
        }
    }
}
