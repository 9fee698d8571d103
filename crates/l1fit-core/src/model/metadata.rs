//! Variable and constraint naming and metadata.
//!
//! Names are optional and stored out of line so unnamed models pay nothing.
//! Metadata values are free-form JSON attached per variable, used by higher
//! layers to tag what a variable stands for.

use std::collections::BTreeMap;

use crate::ids::{ConstraintId, VariableId};
use crate::model::error::ModelError;
use crate::model::Model;

impl Model {
    /// Set the name of a variable.
    pub fn set_variable_name(&mut self, id: VariableId, name: String) -> Result<(), ModelError> {
        self.ensure_variable_exists(id)?;
        self.variable_names
            .get_or_insert_with(BTreeMap::new)
            .insert(id, name);
        Ok(())
    }

    /// Get the name of a variable.
    pub fn get_variable_name(&self, id: VariableId) -> Option<&str> {
        self.variable_names
            .as_ref()
            .and_then(|names| names.get(&id).map(|s| s.as_str()))
    }

    /// Lookup a variable by name.
    pub fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_names.as_ref().and_then(|names| {
            names
                .iter()
                .find_map(|(id, value)| (value == name).then_some(*id))
        })
    }

    /// Set the name of a constraint.
    pub fn set_constraint_name(
        &mut self,
        id: ConstraintId,
        name: String,
    ) -> Result<(), ModelError> {
        self.ensure_constraint_exists(id)?;
        self.constraint_names
            .get_or_insert_with(BTreeMap::new)
            .insert(id, name);
        Ok(())
    }

    /// Get the name of a constraint.
    pub fn get_constraint_name(&self, id: ConstraintId) -> Option<&str> {
        self.constraint_names
            .as_ref()
            .and_then(|names| names.get(&id).map(|s| s.as_str()))
    }

    /// Attach metadata to a variable.
    pub fn set_variable_metadata(
        &mut self,
        id: VariableId,
        metadata: serde_json::Value,
    ) -> Result<(), ModelError> {
        self.ensure_variable_exists(id)?;
        self.variable_metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(id, metadata);
        Ok(())
    }

    /// Get the metadata attached to a variable.
    pub fn get_variable_metadata(&self, id: VariableId) -> Option<&serde_json::Value> {
        self.variable_metadata
            .as_ref()
            .and_then(|meta| meta.get(&id))
    }
}
