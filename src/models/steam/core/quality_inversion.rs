//! Saturation temperature search for a bounded property at a given quality.
//!
//! With quality fixed, internal energy, enthalpy, entropy, and specific volume
//! of the mixture vary along the saturation curve. This module finds the
//! saturation temperature where the mixture value matches the target.

mod error;
mod problem;

pub use error::QualityInversionError;

use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::{
    Region, ResolverConfig, ThermoState,
    dispatch::{Bound, Quality},
    properties::Dome,
    traits::SteamThermoModel,
};

use problem::{QualityProblem, SaturationModel};

/// Resolves a bounded property and a quality.
///
/// The saturation curve between the triple point and just below the critical
/// point is sampled to bracket the lowest root, which bisection then refines.
///
/// # Errors
///
/// Returns [`QualityInversionError`] if the limits cannot be queried, no root
/// is bracketed, or the solver fails to converge.
pub(super) fn quality_inversion<Fluid>(
    thermo: &impl SteamThermoModel<Fluid>,
    bound: Bound,
    quality: Quality,
    config: &ResolverConfig,
) -> Result<ThermoState, QualityInversionError> {
    let limits = thermo.saturation_limits()?;
    let x = quality.into_inner();

    let model = SaturationModel::<_, Fluid>::new(thermo);
    let problem = QualityProblem::new(bound, x);

    let lower = limits.triple_temperature.get::<kelvin>();
    let upper = (limits.critical_temperature - config.critical_margin).get::<kelvin>();

    let bracket = find_bracket(&model, &problem, [lower, upper], config.scan_points).ok_or(
        QualityInversionError::NoRoot {
            property: bound.property(),
            target: bound.target(),
        },
    )?;

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed saturation lookup means the candidate temperature is off
            // the curve. Guide bisection away by assuming positive residual.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(QualityInversionError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let dome = solution.snapshot.output;
    debug!(
        saturation_temperature = ?dome.saturation_temperature(),
        iters = solution.iters,
        "quality inversion converged"
    );

    Ok(ThermoState::new(
        Region::from_quality(x),
        dome.mixture(x).with_bound(bound),
        x,
    ))
}

/// Samples evenly spaced temperatures and returns the first sign change.
fn find_bracket<M>(
    model: &M,
    problem: &QualityProblem,
    [lower, upper]: [f64; 2],
    points: usize,
) -> Option<[f64; 2]>
where
    M: Model<Input = ThermodynamicTemperature, Output = Dome>,
{
    let intervals = points.max(2) - 1;
    let step = (upper - lower) / intervals as f64;

    let mut previous: Option<(f64, f64)> = None;
    for i in 0..=intervals {
        let t = if i == intervals {
            upper
        } else {
            lower + step * i as f64
        };
        let Ok(dome) = model.call(&ThermodynamicTemperature::new::<kelvin>(t)) else {
            continue;
        };
        let residual = problem.residual(&dome);
        if let Some((t_prev, r_prev)) = previous {
            if r_prev * residual <= 0.0 {
                return Some([t_prev, t]);
            }
        }
        previous = Some((t, residual));
    }
    None
}
