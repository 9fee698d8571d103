//! Fit error taxonomy.
//!
//! Formulation-time errors are all detected before any call into the solver;
//! solver-time failures are wrapped unchanged with their status attached.

use crate::types::ErrorDefinition;
use l1fit_core::ModelError;
use l1fit_solver::SolverError;

/// Errors surfaced by the fitting layer.
#[derive(Debug, Clone)]
pub enum FitError {
    /// The coefficient bound list was empty, leaving the polynomial order
    /// undefined.
    EmptyCoefficientBounds,
    /// The deviation cap was negative or not a number.
    InvalidErrMax { err_max: f64 },
    /// A coefficient bound pair has lower > upper or a NaN end.
    InvalidCoefficientBound {
        index: usize,
        lower: f64,
        upper: f64,
    },
    /// A data point has a non-finite coordinate.
    InvalidDataPoint { index: usize, x: f64, y: f64 },
    /// The requested error definition has no formulation path.
    UnsupportedErrorDefinition { definition: ErrorDefinition },
    /// Model assembly failed.
    Model(ModelError),
    /// The external solver failed; the status is preserved unchanged.
    Solve(SolverError),
}

impl FitError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            FitError::EmptyCoefficientBounds => "FIT_BOUNDS_EMPTY",
            FitError::InvalidErrMax { .. } => "FIT_ERR_MAX_INVALID",
            FitError::InvalidCoefficientBound { .. } => "FIT_BOUND_INVALID",
            FitError::InvalidDataPoint { .. } => "FIT_POINT_INVALID",
            FitError::UnsupportedErrorDefinition { .. } => "FIT_ERROR_DEFINITION_UNSUPPORTED",
            FitError::Model(err) => err.code(),
            FitError::Solve(err) => err.code(),
        }
    }
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::EmptyCoefficientBounds => write!(
                f,
                "[{}] At least one coefficient bound is required",
                self.code()
            ),
            FitError::InvalidErrMax { err_max } => write!(
                f,
                "[{}] Deviation cap must be non-negative (got {})",
                self.code(),
                err_max
            ),
            FitError::InvalidCoefficientBound {
                index,
                lower,
                upper,
            } => write!(
                f,
                "[{}] Coefficient bound {} has an invalid range [{}, {}]: ends must be ordered and not NaN",
                self.code(),
                index,
                lower,
                upper
            ),
            FitError::InvalidDataPoint { index, x, y } => write!(
                f,
                "[{}] Data point {} has a non-finite coordinate: ({}, {})",
                self.code(),
                index,
                x,
                y
            ),
            FitError::UnsupportedErrorDefinition { definition } => write!(
                f,
                "[{}] Error definition '{}' is not implemented",
                self.code(),
                definition
            ),
            FitError::Model(err) => err.fmt(f),
            FitError::Solve(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for FitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FitError::Model(err) => Some(err),
            FitError::Solve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for FitError {
    fn from(err: ModelError) -> Self {
        FitError::Model(err)
    }
}

impl From<SolverError> for FitError {
    fn from(err: SolverError) -> Self {
        FitError::Solve(err)
    }
}
