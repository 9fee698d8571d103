//! Model builder methods for adding variables, constraints, and objectives.

use crate::ids::{ConstraintId, VariableId};
use crate::types::{Constraint, Objective, Variable};

use crate::model::error::ModelError;
use crate::model::Model;

impl Model {
    /// Add a variable to the model.
    pub fn add_variable(&mut self, variable: Variable) -> Result<VariableId, ModelError> {
        if !variable.bounds.is_valid() {
            return Err(ModelError::InvalidVariableBounds {
                lower: variable.bounds.lower,
                upper: variable.bounds.upper,
            });
        }

        let id = VariableId::new(self.next_variable_id);
        self.next_variable_id += 1;
        self.variables.insert(id, variable);

        Ok(id)
    }

    /// Add a constraint row to the model.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId, ModelError> {
        if !constraint.bounds.is_valid() {
            return Err(ModelError::InvalidConstraintBounds {
                lower: constraint.bounds.lower,
                upper: constraint.bounds.upper,
            });
        }

        let id = ConstraintId::new(self.next_constraint_id);
        self.next_constraint_id += 1;
        self.constraints.insert(id, constraint);

        Ok(id)
    }

    /// Set the objective function.
    pub fn set_objective(&mut self, objective: Objective) -> Result<(), ModelError> {
        let sense = objective.sense.ok_or(ModelError::NoObjective)?;
        for (var_id, coeff) in &objective.terms {
            self.ensure_variable_exists(*var_id)?;
            if !coeff.is_finite() {
                return Err(ModelError::InvalidCoefficient {
                    coefficient: *coeff,
                });
            }
        }

        let terms = objective.terms.len();
        self.objective = objective;
        tracing::debug!(
            component = "model",
            operation = "set_objective",
            status = "success",
            sense = sense.as_str(),
            terms,
            "Set objective function"
        );
        Ok(())
    }

    /// Set a coefficient at the intersection of a variable column and a
    /// constraint row. An existing entry for the same row is overwritten.
    pub fn set_coefficient(
        &mut self,
        var_id: VariableId,
        constraint_id: ConstraintId,
        coefficient: f64,
    ) -> Result<(), ModelError> {
        if !coefficient.is_finite() {
            return Err(ModelError::InvalidCoefficient { coefficient });
        }
        self.ensure_variable_exists(var_id)?;
        self.ensure_constraint_exists(constraint_id)?;

        let column = self.columns.entry(var_id).or_default();
        match column.iter_mut().find(|(row, _)| *row == constraint_id) {
            Some(entry) => entry.1 = coefficient,
            None => column.push((constraint_id, coefficient)),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bounds;

    #[test]
    fn test_set_coefficient_rejects_unknown_variable() {
        let mut model = Model::new();
        let con = model.add_constraint(Constraint::equality(0.0)).unwrap();
        let ghost = VariableId::new(999);

        let result = model.set_coefficient(ghost, con, 2.5);
        assert_eq!(result, Err(ModelError::InvalidVariableId(ghost)));
    }

    #[test]
    fn test_set_coefficient_rejects_unknown_constraint() {
        let mut model = Model::new();
        let var = model
            .add_variable(Variable::continuous(Bounds::new(0.0, 10.0)))
            .unwrap();
        let ghost = ConstraintId::new(999);

        let result = model.set_coefficient(var, ghost, 2.5);
        assert_eq!(result, Err(ModelError::InvalidConstraintId(ghost)));
    }

    #[test]
    fn test_set_coefficient_rejects_non_finite_weight() {
        let mut model = Model::new();
        let var = model.add_variable(Variable::free()).unwrap();
        let con = model.add_constraint(Constraint::equality(0.0)).unwrap();

        let result = model.set_coefficient(var, con, f64::NAN);
        assert!(matches!(
            result,
            Err(ModelError::InvalidCoefficient { .. })
        ));
    }

    #[test]
    fn test_set_objective_rejects_unknown_variable() {
        let mut model = Model::new();
        let ghost = VariableId::new(3);
        let result = model.set_objective(Objective::minimize(vec![(ghost, 1.0)]));
        assert_eq!(result, Err(ModelError::InvalidVariableId(ghost)));
    }

    #[test]
    fn test_set_objective_rejects_infinite_weight() {
        let mut model = Model::new();
        let var = model.add_variable(Variable::free()).unwrap();
        let result = model.set_objective(Objective::minimize(vec![(var, f64::INFINITY)]));
        assert!(matches!(
            result,
            Err(ModelError::InvalidCoefficient { .. })
        ));
    }
}
