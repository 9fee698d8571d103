//! Point equality constraint construction.

use crate::error::FitError;
use crate::types::DataPoint;
use crate::variables::VariableSpace;
use l1fit_core::{Constraint, Model};

/// Build one equality constraint per data point:
///
/// ```text
/// sum_k coeff[k] * x^(N-1-k)  -  e_plus[i]  +  e_minus[i]  =  y_i
/// ```
///
/// The first coefficient variable multiplies the highest power of x and the
/// last the constant term (weight 1 regardless of x). With both deviation
/// variables at unit objective weight and opposing signs here, any optimum
/// leaves at most one of them positive, so their sum equals the absolute
/// residual exactly.
///
/// Returns the number of constraints built (equal to the point count).
pub fn build_constraints(
    model: &mut Model,
    space: &VariableSpace,
    points: &[DataPoint],
) -> Result<usize, FitError> {
    let order = space.coefficient_count() - 1;
    for (index, point) in points.iter().enumerate() {
        let row = model.add_constraint(Constraint::equality(point.y))?;
        model.set_constraint_name(row, format!("point{}", index + 1))?;

        for (position, (_, coeff_id)) in space.coefficients().iter().enumerate() {
            let power = (order - position) as i32;
            model.set_coefficient(*coeff_id, row, point.x.powi(power))?;
        }

        let pair = space.deviations()[index];
        model.set_coefficient(pair.plus, row, -1.0)?;
        model.set_coefficient(pair.minus, row, 1.0)?;
    }

    Ok(points.len())
}
