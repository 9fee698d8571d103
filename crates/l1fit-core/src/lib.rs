//! Core LP model builder for l1fit.
//!
//! Provides the [`Model`] type for assembling linear programs: bounded
//! variables, linear constraints, a linear objective, and deterministic
//! naming/metadata for both variables and constraints.

pub mod ids;
pub mod model;
pub mod types;

pub use ids::{ConstraintId, VariableId};
pub use model::{Model, ModelError};
pub use types::{Bounds, Constraint, Objective, Sense, Variable};
