#![allow(clippy::float_cmp)]

use l1fit_core::{Bounds, Constraint, Model, Objective, Variable};
use l1fit_minilp::Solver;
use l1fit_solver::{Solve, SolverConfig, SolverError, SolverStatus};

const EPS: f64 = 1e-6;

/// Minimize 2x + 3y subject to x + y >= 5, x,y >= 0.
#[test]
fn test_simple_lp_reaches_optimum() {
    let mut model = Model::new();

    let x = model
        .add_variable(Variable::continuous(Bounds::new(0.0, f64::INFINITY)))
        .unwrap();
    let y = model
        .add_variable(Variable::continuous(Bounds::new(0.0, f64::INFINITY)))
        .unwrap();

    let row = model
        .add_constraint(Constraint {
            bounds: Bounds::new(5.0, f64::INFINITY),
        })
        .unwrap();
    model.set_coefficient(x, row, 1.0).unwrap();
    model.set_coefficient(y, row, 1.0).unwrap();

    model
        .set_objective(Objective::minimize(vec![(x, 2.0), (y, 3.0)]))
        .unwrap();

    let mut solver = Solver::new(model).expect("solver construction failed");
    let solution = solver.solve(&SolverConfig::default()).expect("solve failed");

    // Optimum at x = 5, y = 0, objective 10.
    assert!((solution.objective_value() - 10.0).abs() < EPS);
    assert!((solution.get_primal(x.inner() as usize).unwrap() - 5.0).abs() < EPS);
    assert!(solution.get_primal(y.inner() as usize).unwrap().abs() < EPS);
    assert!(solution.status().is_optimal());
}

/// Config knobs minilp cannot honor are ignored, never an error, and do not
/// change the result.
#[test]
fn test_unsupported_config_knobs_are_ignored() {
    let build = || {
        let mut model = Model::new();
        let x = model
            .add_variable(Variable::continuous(Bounds::new(0.0, 10.0)))
            .unwrap();
        let row = model.add_constraint(Constraint::equality(4.0)).unwrap();
        model.set_coefficient(x, row, 1.0).unwrap();
        model
            .set_objective(Objective::minimize(vec![(x, 1.0)]))
            .unwrap();
        model
    };

    let mut plain = Solver::new(build()).unwrap();
    let baseline = plain.solve(&SolverConfig::default()).unwrap();

    let config = SolverConfig::new()
        .with_time_limit(5.0)
        .with_verbosity(2)
        .with_tolerance(1e-9);
    let mut tuned = Solver::new(build()).unwrap();
    let solution = tuned.solve(&config).unwrap();

    assert!(solution.status().is_optimal());
    assert!((solution.objective_value() - baseline.objective_value()).abs() < EPS);
}

/// An equality row is honored exactly.
#[test]
fn test_equality_row_is_binding() {
    let mut model = Model::new();

    let x = model
        .add_variable(Variable::continuous(Bounds::new(-10.0, 10.0)))
        .unwrap();
    let row = model.add_constraint(Constraint::equality(3.0)).unwrap();
    model.set_coefficient(x, row, 1.0).unwrap();
    model
        .set_objective(Objective::minimize(vec![(x, 1.0)]))
        .unwrap();

    let mut solver = Solver::new(model).unwrap();
    let solution = solver.solve(&SolverConfig::default()).unwrap();

    assert!((solution.get_primal(0).unwrap() - 3.0).abs() < EPS);
}

/// A ranged row is lowered to a Ge/Le pair.
#[test]
fn test_ranged_row_clamps_solution() {
    let mut model = Model::new();

    let x = model
        .add_variable(Variable::continuous(Bounds::new(-100.0, 100.0)))
        .unwrap();
    let row = model
        .add_constraint(Constraint {
            bounds: Bounds::new(2.0, 4.0),
        })
        .unwrap();
    model.set_coefficient(x, row, 1.0).unwrap();
    model
        .set_objective(Objective::minimize(vec![(x, 1.0)]))
        .unwrap();

    let mut solver = Solver::new(model).unwrap();
    let solution = solver.solve(&SolverConfig::default()).unwrap();

    assert!((solution.get_primal(0).unwrap() - 2.0).abs() < EPS);
}

/// Contradictory equality rows surface as an infeasible solve failure.
#[test]
fn test_infeasible_model_fails_with_status() {
    let mut model = Model::new();

    let x = model
        .add_variable(Variable::continuous(Bounds::new(-10.0, 10.0)))
        .unwrap();
    let first = model.add_constraint(Constraint::equality(1.0)).unwrap();
    let second = model.add_constraint(Constraint::equality(2.0)).unwrap();
    model.set_coefficient(x, first, 1.0).unwrap();
    model.set_coefficient(x, second, 1.0).unwrap();
    model
        .set_objective(Objective::minimize(vec![(x, 1.0)]))
        .unwrap();

    let mut solver = Solver::new(model).unwrap();
    let err = solver.solve(&SolverConfig::default()).expect_err("expected infeasible");

    match err {
        SolverError::SolveFailure { status } => assert_eq!(status, SolverStatus::Infeasible),
        other => panic!("unexpected error: {other}"),
    }
}

/// Maximizing an unbounded variable surfaces as an unbounded solve failure.
#[test]
fn test_unbounded_model_fails_with_status() {
    let mut model = Model::new();

    let x = model.add_variable(Variable::free()).unwrap();
    let objective = Objective {
        sense: Some(l1fit_core::Sense::Maximize),
        terms: vec![(x, 1.0)],
    };
    model.set_objective(objective).unwrap();

    let mut solver = Solver::new(model).unwrap();
    let err = solver.solve(&SolverConfig::default()).expect_err("expected unbounded");

    match err {
        SolverError::SolveFailure { status } => assert_eq!(status, SolverStatus::Unbounded),
        other => panic!("unexpected error: {other}"),
    }
}
