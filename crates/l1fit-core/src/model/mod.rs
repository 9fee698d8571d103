//! Model module for building linear programs.
//!
//! # Module Organization
//!
//! - [`error`]: Model error types
//! - [`builder`]: Methods for adding variables, constraints, and objectives
//! - [`metadata`]: Variable and constraint naming and metadata

mod builder;
mod error;
mod metadata;

use crate::ids::{ConstraintId, VariableId};
use crate::types::{Constraint, Objective, Variable};
use std::collections::BTreeMap;

pub use error::ModelError;

/// An incrementally built linear program.
///
/// Variables and constraints are assigned sequential ids in insertion order.
/// The coefficient matrix lives in column-first sparse storage: one column of
/// `(constraint, weight)` pairs per variable.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) variables: BTreeMap<VariableId, Variable>,
    pub(crate) constraints: BTreeMap<ConstraintId, Constraint>,
    pub(crate) objective: Objective,
    // Column-first sparse storage: variable_id -> vec of (constraint_id, coefficient)
    pub(crate) columns: BTreeMap<VariableId, Vec<(ConstraintId, f64)>>,
    pub(crate) next_variable_id: u32,
    pub(crate) next_constraint_id: u32,
    // Lazy-allocated naming and metadata storage
    pub(crate) variable_names: Option<BTreeMap<VariableId, String>>,
    pub(crate) constraint_names: Option<BTreeMap<ConstraintId, String>>,
    pub(crate) variable_metadata: Option<BTreeMap<VariableId, serde_json::Value>>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self {
            variables: BTreeMap::new(),
            constraints: BTreeMap::new(),
            objective: Objective::new(),
            columns: BTreeMap::new(),
            next_variable_id: 0,
            next_constraint_id: 0,
            variable_names: None,
            constraint_names: None,
            variable_metadata: None,
        }
    }

    /// Number of variables in the model.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraint rows in the model.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Number of nonzero coefficients across all columns.
    pub fn num_coefficients(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Get a variable by id.
    pub fn get_variable(&self, id: VariableId) -> Result<&Variable, ModelError> {
        self.variables
            .get(&id)
            .ok_or(ModelError::InvalidVariableId(id))
    }

    /// Get a constraint by id.
    pub fn get_constraint(&self, id: ConstraintId) -> Result<&Constraint, ModelError> {
        self.constraints
            .get(&id)
            .ok_or(ModelError::InvalidConstraintId(id))
    }

    /// Get the sparse column for a variable, if it has any coefficients.
    pub fn get_column(&self, id: VariableId) -> Option<&Vec<(ConstraintId, f64)>> {
        self.columns.get(&id)
    }

    /// Iterate variables in id order.
    pub fn variables(&self) -> impl Iterator<Item = (VariableId, &Variable)> {
        self.variables.iter().map(|(id, var)| (*id, var))
    }

    /// Iterate constraints in id order.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        self.constraints.iter().map(|(id, con)| (*id, con))
    }

    /// Get the objective.
    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub(crate) fn ensure_variable_exists(&self, id: VariableId) -> Result<(), ModelError> {
        if self.variables.contains_key(&id) {
            Ok(())
        } else {
            Err(ModelError::InvalidVariableId(id))
        }
    }

    pub(crate) fn ensure_constraint_exists(&self, id: ConstraintId) -> Result<(), ModelError> {
        if self.constraints.contains_key(&id) {
            Ok(())
        } else {
            Err(ModelError::InvalidConstraintId(id))
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
