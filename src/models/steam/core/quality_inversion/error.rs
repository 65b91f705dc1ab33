use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::{models::steam::core::PropertyId, support::thermo::PropertyError};

/// Errors that can occur while solving for the saturation temperature at a given quality.
#[derive(Debug, Error)]
pub enum QualityInversionError {
    /// The saturation curve limits could not be queried.
    #[error("saturation limits unavailable")]
    Limits(#[from] PropertyError),

    /// No saturation temperature brackets the target.
    #[error("no saturation temperature gives {property} = {target} at this quality")]
    NoRoot {
        property: PropertyId,

        /// Target value in SI base units.
        target: f64,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best residual achieved, relative to the target.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
