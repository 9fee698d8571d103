//! Top-level fitting entry points using the default minilp backend.

use crate::config::FitConfig;
use crate::error::FitError;
use crate::extract::Coefficients;
use crate::observer::{FitObserver, NullObserver};
use crate::problem::FitProblem;
use crate::types::{CoefficientBound, DataPoint};
use l1fit_solver::SolverConfig;

/// Fit a polynomial to `points` by minimizing the total absolute deviation.
///
/// The number of bounds fixes the polynomial order (N bounds fit an order
/// N−1 polynomial), highest power first. Returns the solved coefficients in
/// that same order.
///
/// # Errors
///
/// Invalid inputs fail before any solver call; an infeasible or unbounded
/// program surfaces as [`FitError::Solve`] with the solver status attached.
pub fn fit_polynomial(
    points: &[DataPoint],
    bounds: &[CoefficientBound],
    config: &FitConfig,
) -> Result<Coefficients, FitError> {
    fit_polynomial_with_observer(points, bounds, config, &mut NullObserver)
}

/// Like [`fit_polynomial`], reporting formulation and solve milestones to
/// the given observer.
pub fn fit_polynomial_with_observer(
    points: &[DataPoint],
    bounds: &[CoefficientBound],
    config: &FitConfig,
    observer: &mut dyn FitObserver,
) -> Result<Coefficients, FitError> {
    let problem = FitProblem::formulate(points, bounds, config, observer)?;
    problem.solve_with(
        l1fit_minilp::Solver::new,
        &SolverConfig::default(),
        observer,
    )
}
