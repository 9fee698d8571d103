//! Objective construction.

use crate::error::FitError;
use crate::variables::VariableSpace;
use l1fit_core::{Model, Objective};

/// Set the objective: minimize the sum of all deviation variables with unit
/// weight. Coefficient variables carry implicit weight zero, so the optimum
/// places the whole objective value on the residuals.
///
/// Returns the number of objective terms.
pub fn build_objective(model: &mut Model, space: &VariableSpace) -> Result<usize, FitError> {
    let mut terms = Vec::with_capacity(2 * space.deviations().len());
    for pair in space.deviations() {
        terms.push((pair.plus, 1.0));
        terms.push((pair.minus, 1.0));
    }

    let count = terms.len();
    model.set_objective(Objective::minimize(terms))?;
    Ok(count)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::{CoefficientBound, DataPoint};
    use l1fit_core::Sense;

    #[test]
    fn test_objective_covers_deviations_only() {
        let mut model = Model::new();
        let points = [DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)];
        let bounds = [CoefficientBound::new(-10.0, 10.0); 2];
        let space = VariableSpace::build(&mut model, &points, &bounds, 100.0).unwrap();

        let terms = build_objective(&mut model, &space).unwrap();
        assert_eq!(terms, 4);

        let objective = model.objective();
        assert_eq!(objective.sense, Some(Sense::Minimize));
        assert_eq!(objective.terms.len(), 4);

        let coefficient_ids: Vec<_> =
            space.coefficients().iter().map(|(_, id)| *id).collect();
        for (id, weight) in &objective.terms {
            assert_eq!(*weight, 1.0);
            assert!(!coefficient_ids.contains(id));
        }
    }

    #[test]
    fn test_zero_points_give_an_empty_minimization() {
        let mut model = Model::new();
        let bounds = [CoefficientBound::new(-10.0, 10.0); 2];
        let space = VariableSpace::build(&mut model, &[], &bounds, 100.0).unwrap();

        let terms = build_objective(&mut model, &space).unwrap();
        assert_eq!(terms, 0);
        assert_eq!(model.objective().sense, Some(Sense::Minimize));
        assert!(model.objective().terms.is_empty());
    }
}
