//! Caller-facing input types for a fit.

/// A single 2D observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Allowed range for one polynomial coefficient.
///
/// `None` on either end means unbounded on that end and maps to the matching
/// infinity. Both ends default independently; a bound may be open below,
/// above, both, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoefficientBound {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl CoefficientBound {
    /// A bound closed on both ends.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// The default coefficient range,
    /// [`DEFAULT_COEFFICIENT_RANGE`](crate::config::DEFAULT_COEFFICIENT_RANGE).
    pub fn default_range() -> Self {
        crate::config::DEFAULT_COEFFICIENT_RANGE.into()
    }

    /// A fully unbounded coefficient.
    pub fn unbounded() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// Bounded below only.
    pub fn at_least(lower: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// Bounded above only.
    pub fn at_most(upper: f64) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// The effective lower bound, with `None` widened to negative infinity.
    pub fn effective_lower(self) -> f64 {
        self.lower.unwrap_or(f64::NEG_INFINITY)
    }

    /// The effective upper bound, with `None` widened to positive infinity.
    pub fn effective_upper(self) -> f64 {
        self.upper.unwrap_or(f64::INFINITY)
    }
}

impl From<(f64, f64)> for CoefficientBound {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

/// How the residual between curve and points is aggregated.
///
/// Only [`SumOfAbsoluteDeviations`](ErrorDefinition::SumOfAbsoluteDeviations)
/// has a formulation path; requesting the maximum-deviation variant fails
/// with an unsupported error rather than silently falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorDefinition {
    /// Minimize the sum of absolute residuals (L1 regression).
    #[default]
    SumOfAbsoluteDeviations,
    /// Minimize the largest absolute residual (Chebyshev fit). Reserved.
    MaximumDeviation,
}

impl ErrorDefinition {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorDefinition::SumOfAbsoluteDeviations => "sum_of_absolute_deviations",
            ErrorDefinition::MaximumDeviation => "maximum_deviation",
        }
    }
}

impl std::fmt::Display for ErrorDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
