//! Steam state resolution from any two independent properties.
//!
//! A caller supplies two distinct properties from pressure, temperature,
//! internal energy, enthalpy, entropy, specific volume, and quality. The pair
//! is validated, converted to canonical units, and dispatched on its
//! (unordered) property types:
//!
//! | Pair                              | Strategy                                   |
//! |-----------------------------------|--------------------------------------------|
//! | `p`, `T`                          | compare `T` with `Tsat(p)`                 |
//! | `p` or `T`, `x`                   | interpolate across the dome                |
//! | `p` or `T`, one of `u h s v`      | place the value relative to the dome       |
//! | one of `u h s v`, `x`             | search the saturation curve by bisection   |
//! | two of `u h s v` (not `u`, `h`)   | backend solve, then classify               |
//!
//! Below the triple point and at or above the critical point there is no dome.
//! Quality requests fail there, and everything else resolves as a
//! single-phase state: vapor above the critical temperature or below the
//! triple point pressure, liquid otherwise.

mod config;
mod dispatch;
mod error;
mod input;
mod properties;
mod quality_inversion;
mod region;
mod results;
mod strategy;
mod traits;
mod two_states;

#[cfg(test)]
pub(super) mod test_support;

pub use config::ResolverConfig;
pub use error::{InputIssue, ResolveError};
pub use input::{ParsePropertyIdError, PropertyId, PropertyValue, StateSpec};
pub use quality_inversion::QualityInversionError;
pub use region::Region;
pub use results::{PropertyValues, SINGLE_PHASE_QUALITY, StateChange, ThermoState};
pub use traits::SteamThermoModel;
pub use two_states::{StateError, TwoStateResults, TwoStates, Which};

pub(super) use two_states::resolve_two;

use tracing::debug;

use dispatch::{Dispatch, dispatch};
use error::Failure;

/// Resolves one steam state.
///
/// # Errors
///
/// Returns [`ResolveError`] for a repeated property, an invalid value, an
/// unsupported pair, or a failed property lookup.
pub(super) fn resolve<Fluid>(
    spec: &StateSpec,
    config: &ResolverConfig,
    thermo: &impl SteamThermoModel<Fluid>,
) -> Result<ThermoState, ResolveError> {
    let plan = dispatch(spec)?;
    debug!(given = %spec, ?plan, "resolving steam state");

    let resolved = match plan {
        Dispatch::PressureTemperature(p, t) => {
            strategy::pressure_temperature(thermo, p, t, config)
        }
        Dispatch::SaturatedMixture(anchor, x) => strategy::saturated_mixture(thermo, anchor, x),
        Dispatch::Bounded(anchor, bound) => strategy::bounded(thermo, anchor, bound, config),
        Dispatch::QualityInversion(bound, x) => {
            quality_inversion::quality_inversion(thermo, bound, x, config).map_err(|err| {
                Failure::new(format!("{} search at fixed quality", bound.property()), err)
            })
        }
        Dispatch::General(input, given) => strategy::general(thermo, input, given, config),
    };

    let state = resolved.map_err(|failure| failure.into_resolve_error(*spec))?;
    debug!(region = %state.region, quality = state.quality, "resolved steam state");
    Ok(state)
}
