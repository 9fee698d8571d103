//! Decision variable allocation for a fit.
//!
//! One coefficient variable per bound entry (highest power first), followed
//! by a positive/negative deviation pair per data point. The split pair is
//! what lets an LP express an absolute residual: the point constraint ties
//! `e_plus - e_minus` to the signed residual, and minimizing their sum makes
//! at most one of them nonzero at the optimum.

use crate::error::FitError;
use crate::types::{CoefficientBound, DataPoint};
use l1fit_core::{Bounds, Model, Variable, VariableId};

/// What a decision variable stands for in the fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableRole {
    Coefficient,
    PositiveDeviation,
    NegativeDeviation,
}

impl VariableRole {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableRole::Coefficient => "coefficient",
            VariableRole::PositiveDeviation => "positive_deviation",
            VariableRole::NegativeDeviation => "negative_deviation",
        }
    }
}

/// The deviation variable pair belonging to one data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviationPair {
    pub plus: VariableId,
    pub minus: VariableId,
}

/// The allocated decision variables of one formulation, in construction
/// order: coefficients (highest power first), then deviation pairs (point
/// order). Extraction reads coefficient order from here, never from names.
#[derive(Debug, Clone)]
pub struct VariableSpace {
    coefficients: Vec<(String, VariableId)>,
    deviations: Vec<DeviationPair>,
}

impl VariableSpace {
    /// Allocate all decision variables for a fit in the given model.
    ///
    /// Validates every input before touching the model, so a failed build
    /// never reaches the solver.
    pub fn build(
        model: &mut Model,
        points: &[DataPoint],
        bounds: &[CoefficientBound],
        err_max: f64,
    ) -> Result<Self, FitError> {
        if bounds.is_empty() {
            return Err(FitError::EmptyCoefficientBounds);
        }
        if err_max.is_nan() || err_max < 0.0 {
            return Err(FitError::InvalidErrMax { err_max });
        }
        for (index, bound) in bounds.iter().enumerate() {
            let lower = bound.effective_lower();
            let upper = bound.effective_upper();
            if lower.is_nan() || upper.is_nan() || lower > upper {
                return Err(FitError::InvalidCoefficientBound {
                    index,
                    lower,
                    upper,
                });
            }
        }
        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(FitError::InvalidDataPoint {
                    index,
                    x: point.x,
                    y: point.y,
                });
            }
        }

        let count = bounds.len();
        let mut coefficients = Vec::with_capacity(count);
        for (index, bound) in bounds.iter().enumerate() {
            let name = coefficient_name(index, count);
            let id = model.add_variable(Variable::continuous(Bounds::new(
                bound.effective_lower(),
                bound.effective_upper(),
            )))?;
            model.set_variable_name(id, name.clone())?;
            model.set_variable_metadata(
                id,
                serde_json::json!({
                    "role": VariableRole::Coefficient.as_str(),
                    "power": count - 1 - index,
                }),
            )?;
            coefficients.push((name, id));
        }

        let mut deviations = Vec::with_capacity(points.len());
        for index in 0..points.len() {
            let plus = model.add_variable(Variable::non_negative(err_max))?;
            model.set_variable_name(plus, format!("e{}_plus", index + 1))?;
            model.set_variable_metadata(
                plus,
                serde_json::json!({
                    "role": VariableRole::PositiveDeviation.as_str(),
                    "point": index,
                }),
            )?;

            let minus = model.add_variable(Variable::non_negative(err_max))?;
            model.set_variable_name(minus, format!("e{}_minus", index + 1))?;
            model.set_variable_metadata(
                minus,
                serde_json::json!({
                    "role": VariableRole::NegativeDeviation.as_str(),
                    "point": index,
                }),
            )?;

            deviations.push(DeviationPair { plus, minus });
        }

        Ok(Self {
            coefficients,
            deviations,
        })
    }

    /// Number of coefficient variables (polynomial order + 1).
    pub fn coefficient_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Coefficient `(name, id)` pairs, highest power first.
    pub fn coefficients(&self) -> &[(String, VariableId)] {
        &self.coefficients
    }

    /// Deviation pairs, one per data point in point order.
    pub fn deviations(&self) -> &[DeviationPair] {
        &self.deviations
    }

    /// Total number of decision variables.
    pub fn len(&self) -> usize {
        self.coefficients.len() + 2 * self.deviations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deterministic positional names: a first-order fit keeps the conventional
/// slope/intercept symbols; anything else is indexed from the highest power
/// down, so arbitrary orders never exhaust the scheme.
fn coefficient_name(index: usize, count: usize) -> String {
    if count == 2 {
        match index {
            0 => "m".to_string(),
            _ => "b".to_string(),
        }
    } else {
        format!("c{index}")
    }
}
