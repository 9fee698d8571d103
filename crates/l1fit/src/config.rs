//! Fit configuration.

use crate::types::ErrorDefinition;

/// Default cap on the magnitude of a single deviation variable.
pub const DEFAULT_ERR_MAX: f64 = 100.0;

/// Default range for a polynomial coefficient when the caller has no better
/// prior, as `(lower, upper)`. See
/// [`CoefficientBound::default_range`](crate::types::CoefficientBound::default_range).
pub const DEFAULT_COEFFICIENT_RANGE: (f64, f64) = (-100.0, 100.0);

/// Configuration for one fit, constructed once by the caller and passed
/// immutably.
///
/// Defaults: `err_max` = [`DEFAULT_ERR_MAX`], `error_definition` =
/// [`ErrorDefinition::SumOfAbsoluteDeviations`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig {
    /// Upper bound on each deviation variable. Residuals larger than this
    /// make the program infeasible, so it doubles as a fit-quality cap.
    pub err_max: f64,
    /// How residuals are aggregated into the objective.
    pub error_definition: ErrorDefinition,
}

impl FitConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deviation cap.
    pub fn with_err_max(mut self, err_max: f64) -> Self {
        self.err_max = err_max;
        self
    }

    /// Set the error definition.
    pub fn with_error_definition(mut self, definition: ErrorDefinition) -> Self {
        self.error_definition = definition;
        self
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            err_max: DEFAULT_ERR_MAX,
            error_definition: ErrorDefinition::default(),
        }
    }
}
