//! Mapping a solved assignment back to polynomial coefficients.

use crate::error::FitError;
use crate::variables::VariableSpace;
use l1fit_solver::{SolutionView, SolverError};

/// Solved polynomial coefficients, highest power first.
///
/// Order comes from the variable space established at formulation time, not
/// from the names, so positional naming and the "m"/"b" alias behave the
/// same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    pairs: Vec<(String, f64)>,
    objective_value: f64,
}

impl Coefficients {
    /// Look up a coefficient by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.pairs
            .iter()
            .find_map(|(n, value)| (n == name).then_some(*value))
    }

    /// All `(name, value)` pairs, highest power first.
    pub fn pairs(&self) -> &[(String, f64)] {
        &self.pairs
    }

    /// Coefficient values, highest power first.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.pairs.iter().map(|(_, value)| *value)
    }

    /// Number of coefficients (polynomial order + 1).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Total absolute deviation achieved by this fit.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Evaluate the fitted polynomial at `x` (Horner form).
    pub fn evaluate(&self, x: f64) -> f64 {
        self.values().fold(0.0, |acc, value| acc * x + value)
    }
}

impl std::fmt::Display for Coefficients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (name, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}

/// Read the coefficient variables out of a solved assignment, preserving the
/// highest-power-first order of the variable space.
pub fn extract_coefficients(
    space: &VariableSpace,
    solution: &impl SolutionView,
) -> Result<Coefficients, FitError> {
    let mut pairs = Vec::with_capacity(space.coefficient_count());
    for (name, id) in space.coefficients() {
        let value = solution.get_primal(id.inner() as usize).ok_or_else(|| {
            FitError::Solve(SolverError::InternalError(format!(
                "solution has no primal value for variable {}",
                id.inner()
            )))
        })?;
        pairs.push((name.clone(), value));
    }

    Ok(Coefficients {
        pairs,
        objective_value: solution.objective_value(),
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::{CoefficientBound, DataPoint};
    use l1fit_core::Model;
    use l1fit_solver::SolverStatus;

    struct FixtureSolution {
        primals: Vec<f64>,
        objective: f64,
    }

    impl SolutionView for FixtureSolution {
        fn objective_value(&self) -> f64 {
            self.objective
        }

        fn status(&self) -> SolverStatus {
            SolverStatus::Optimal
        }

        fn get_primal(&self, index: usize) -> Option<f64> {
            self.primals.get(index).copied()
        }

        fn primal_values(&self) -> &[f64] {
            &self.primals
        }

        fn solve_time_seconds(&self) -> f64 {
            0.0
        }
    }

    fn linear_space() -> VariableSpace {
        let mut model = Model::new();
        VariableSpace::build(
            &mut model,
            &[DataPoint::new(0.0, 0.0)],
            &[CoefficientBound::new(-10.0, 10.0); 2],
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn test_extraction_preserves_construction_order() {
        let space = linear_space();
        let solution = FixtureSolution {
            primals: vec![1.5, 0.25, 0.0, 0.0],
            objective: 0.0,
        };

        let coefficients = extract_coefficients(&space, &solution).unwrap();
        assert_eq!(coefficients.len(), 2);
        assert_eq!(coefficients.pairs()[0], ("m".to_string(), 1.5));
        assert_eq!(coefficients.pairs()[1], ("b".to_string(), 0.25));
        assert_eq!(coefficients.get("m"), Some(1.5));
        assert_eq!(coefficients.get("q"), None);
    }

    #[test]
    fn test_missing_primal_is_a_solver_error() {
        let space = linear_space();
        let solution = FixtureSolution {
            primals: vec![1.5],
            objective: 0.0,
        };

        let result = extract_coefficients(&space, &solution);
        assert!(matches!(result, Err(FitError::Solve(_))));
    }

    #[test]
    fn test_evaluate_uses_descending_powers() {
        let space = linear_space();
        let solution = FixtureSolution {
            primals: vec![2.0, 1.0, 0.0, 0.0],
            objective: 0.0,
        };

        let coefficients = extract_coefficients(&space, &solution).unwrap();
        // y = 2x + 1
        assert_eq!(coefficients.evaluate(0.0), 1.0);
        assert_eq!(coefficients.evaluate(3.0), 7.0);
    }

    #[test]
    fn test_display_lists_named_values() {
        let space = linear_space();
        let solution = FixtureSolution {
            primals: vec![2.0, 1.0, 0.0, 0.0],
            objective: 0.0,
        };
        let coefficients = extract_coefficients(&space, &solution).unwrap();
        assert_eq!(coefficients.to_string(), "m = 2, b = 1");
    }
}
