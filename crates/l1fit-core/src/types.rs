use crate::ids::VariableId;

/// Optimization sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "minimize",
            Sense::Maximize => "maximize",
        }
    }
}

/// Lower/upper bound pair for a variable or constraint row.
///
/// Infinite ends are expressed with `f64::NEG_INFINITY` / `f64::INFINITY`;
/// an equality row uses `lower == upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Bounds pinning a row or variable to a single value.
    pub fn equality(value: f64) -> Self {
        Self {
            lower: value,
            upper: value,
        }
    }

    /// Fully unbounded on both ends.
    pub fn free() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// A bound pair is well formed when neither end is NaN and lower <= upper.
    pub fn is_valid(self) -> bool {
        !self.lower.is_nan() && !self.upper.is_nan() && self.lower <= self.upper
    }
}

/// A continuous decision variable with bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    pub bounds: Bounds,
}

impl Variable {
    /// Create a continuous variable with the given bounds.
    pub fn continuous(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Create a non-negative variable with the given upper bound.
    pub fn non_negative(upper: f64) -> Self {
        Self {
            bounds: Bounds::new(0.0, upper),
        }
    }

    /// Create a fully unbounded variable.
    pub fn free() -> Self {
        Self {
            bounds: Bounds::free(),
        }
    }
}

/// A linear constraint row, bounded below and/or above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub bounds: Bounds,
}

impl Constraint {
    /// An equality row with the given right-hand side.
    pub fn equality(rhs: f64) -> Self {
        Self {
            bounds: Bounds::equality(rhs),
        }
    }
}

/// Linear objective with a sense and per-variable weights.
#[derive(Debug, Clone)]
pub struct Objective {
    pub sense: Option<Sense>,
    pub terms: Vec<(VariableId, f64)>,
}

impl Objective {
    /// Create a new empty objective.
    pub fn new() -> Self {
        Self {
            sense: None,
            terms: Vec::new(),
        }
    }

    /// A minimization objective over the given terms.
    pub fn minimize(terms: Vec<(VariableId, f64)>) -> Self {
        Self {
            sense: Some(Sense::Minimize),
            terms,
        }
    }
}

impl Default for Objective {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_bounds_pin_both_ends() {
        let bounds = Bounds::equality(3.5);
        assert_eq!(bounds.lower, 3.5);
        assert_eq!(bounds.upper, 3.5);
        assert!(bounds.is_valid());
    }

    #[test]
    fn test_free_bounds_are_infinite() {
        let bounds = Bounds::free();
        assert!(bounds.lower.is_infinite() && bounds.lower < 0.0);
        assert!(bounds.upper.is_infinite() && bounds.upper > 0.0);
    }

    #[test]
    fn test_inverted_bounds_are_invalid() {
        assert!(!Bounds::new(5.0, 1.0).is_valid());
        assert!(!Bounds::new(f64::NAN, 1.0).is_valid());
        assert!(Bounds::new(-1.0, 1.0).is_valid());
    }

    #[test]
    fn test_non_negative_variable_starts_at_zero() {
        let var = Variable::non_negative(100.0);
        assert_eq!(var.bounds.lower, 0.0);
        assert_eq!(var.bounds.upper, 100.0);
    }

    #[test]
    fn test_minimize_objective_has_sense() {
        let objective = Objective::minimize(vec![(VariableId::new(0), 1.0)]);
        assert_eq!(objective.sense, Some(Sense::Minimize));
        assert_eq!(objective.terms.len(), 1);
    }
}
