//! Orchestration of one formulate-solve-extract cycle.

use crate::config::FitConfig;
use crate::constraints::build_constraints;
use crate::error::FitError;
use crate::extract::{extract_coefficients, Coefficients};
use crate::objective::build_objective;
use crate::observer::FitObserver;
use crate::types::{CoefficientBound, DataPoint, ErrorDefinition};
use crate::variables::VariableSpace;
use l1fit_core::Model;
use l1fit_solver::{SolutionView, Solve, SolverConfig, SolverError};

/// A fully formulated LP instance for one fit, ready to hand to a solver.
///
/// All entities are created fresh per formulation from immutable inputs;
/// nothing outlives the cycle. Concurrent fits each formulate their own
/// instance.
#[derive(Debug, Clone)]
pub struct FitProblem {
    model: Model,
    space: VariableSpace,
}

impl FitProblem {
    /// Translate points and coefficient bounds into an LP instance.
    ///
    /// Every input is validated here, so a returned problem is guaranteed
    /// solvable input-wise; only solver-side outcomes (infeasible,
    /// unbounded) remain.
    pub fn formulate(
        points: &[DataPoint],
        bounds: &[CoefficientBound],
        config: &FitConfig,
        observer: &mut dyn FitObserver,
    ) -> Result<Self, FitError> {
        match config.error_definition {
            ErrorDefinition::SumOfAbsoluteDeviations => {}
            definition @ ErrorDefinition::MaximumDeviation => {
                return Err(FitError::UnsupportedErrorDefinition { definition });
            }
        }

        let mut model = Model::new();
        let space = VariableSpace::build(&mut model, points, bounds, config.err_max)?;
        observer.variables_created(space.coefficient_count(), 2 * space.deviations().len());

        let terms = build_objective(&mut model, &space)?;
        observer.objective_built(terms);

        let count = build_constraints(&mut model, &space, points)?;
        observer.constraints_built(count);

        Ok(Self { model, space })
    }

    /// The formulated LP model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The decision variables of this formulation.
    pub fn space(&self) -> &VariableSpace {
        &self.space
    }

    /// Hand the model to a solver built by `make_solver`, run the solve with
    /// `solver_config`, and extract the coefficients. A non-optimal solver
    /// outcome is terminal and propagated unchanged; nothing is retried or
    /// coerced.
    pub fn solve_with<S, F>(
        self,
        make_solver: F,
        solver_config: &SolverConfig,
        observer: &mut dyn FitObserver,
    ) -> Result<Coefficients, FitError>
    where
        S: Solve,
        F: FnOnce(Model) -> Result<S, SolverError>,
    {
        observer.solve_started(self.model.num_variables(), self.model.num_constraints());

        let mut solver = make_solver(self.model)?;
        let solution = solver.solve(solver_config)?;

        observer.solve_finished(
            solution.status(),
            solution.objective_value(),
            solution.solve_time_seconds(),
        );

        extract_coefficients(&self.space, &solution)
    }
}
