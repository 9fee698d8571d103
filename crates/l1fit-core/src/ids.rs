//! Typed identifiers for model entities.
//!
//! Variables and constraints are addressed by opaque ids handed out by the
//! [`Model`](crate::Model) in insertion order, so formulations that add
//! entities in a fixed sequence get identical ids on every run.

/// Identifier of a decision variable within a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VariableId(u32);

impl VariableId {
    /// Create an id from a raw index.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw index of this variable, usable as a position into solution arrays.
    pub fn inner(self) -> u32 {
        self.0
    }
}

/// Identifier of a constraint row within a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ConstraintId(u32);

impl ConstraintId {
    /// Create an id from a raw index.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw index of this constraint row.
    pub fn inner(self) -> u32 {
        self.0
    }
}
