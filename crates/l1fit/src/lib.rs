//! Polynomial curve fitting by minimum absolute deviation (L1 regression),
//! formulated as a linear program.
//!
//! The absolute value in the residual is linearized with the standard
//! split-error trick: each point gets a non-negative positive/negative
//! deviation pair tied to the signed residual by an equality constraint, and
//! the objective minimizes the sum of all deviation variables. At any
//! optimum at most one side of each pair is nonzero, so the objective equals
//! the sum of absolute residuals.
//!
//! ```no_run
//! use l1fit::{fit_polynomial, CoefficientBound, DataPoint, FitConfig};
//!
//! let points = [
//!     DataPoint::new(0.0, 0.0),
//!     DataPoint::new(1.5, 3.0),
//!     DataPoint::new(4.5, 7.0),
//! ];
//! let bounds = [CoefficientBound::new(-10.0, 10.0); 2];
//!
//! let coefficients = fit_polynomial(&points, &bounds, &FitConfig::new())?;
//! println!("{coefficients}");
//! # Ok::<(), l1fit::FitError>(())
//! ```
//!
//! Credit for the formulation: "Curve Fitting with Linear Programming",
//! H. Swanson and R. E. D. Woolsey.

pub mod config;
pub mod constraints;
pub mod error;
pub mod extract;
pub mod fit;
pub mod objective;
pub mod observer;
pub mod problem;
pub mod types;
pub mod variables;

pub use config::{FitConfig, DEFAULT_COEFFICIENT_RANGE, DEFAULT_ERR_MAX};
pub use error::FitError;
pub use l1fit_solver::SolverConfig;
pub use extract::Coefficients;
pub use fit::{fit_polynomial, fit_polynomial_with_observer};
pub use observer::{FitObserver, NullObserver, TracingObserver};
pub use problem::FitProblem;
pub use types::{CoefficientBound, DataPoint, ErrorDefinition};
pub use variables::{DeviationPair, VariableRole, VariableSpace};
