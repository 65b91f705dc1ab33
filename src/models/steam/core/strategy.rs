//! Resolution strategies, one per kind of property pair.

use tracing::debug;
use uom::{
    ConstZero,
    si::f64::{Pressure, TemperatureInterval, ThermodynamicTemperature},
};

use crate::support::{
    thermo::{PropertyError, StateInput},
    units::TemperatureDifference,
};

use super::{
    Region, ResolverConfig, ThermoState,
    dispatch::{Anchor, Bound, Quality},
    error::Failure,
    properties::{Dome, Properties, off_dome_region},
    traits::SteamThermoModel,
};

/// Resolves a `(p, T)` pair by comparing `T` with the saturation temperature at `p`.
pub(super) fn pressure_temperature<Fluid>(
    model: &impl SteamThermoModel<Fluid>,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    config: &ResolverConfig,
) -> Result<ThermoState, Failure> {
    let given = |properties: Properties| {
        properties
            .with_anchor(Anchor::Pressure(pressure))
            .with_anchor(Anchor::Temperature(temperature))
    };

    let Some(dome) = lookup_dome(model, Anchor::Pressure(pressure))? else {
        let properties = backend_state(model, StateInput::PressureTemperature(pressure, temperature))?;
        let region = classify_off_dome(model, pressure, temperature)?;
        return Ok(ThermoState::single_phase(region, given(properties)));
    };

    let offset = temperature.minus(dome.saturation_temperature());
    if offset.abs() <= config.saturation_temp_tol {
        debug!(?offset, "temperature is at saturation, resolving as saturated liquid");
        return Ok(ThermoState::new(Region::Saturated, given(dome.liquid), 0.0));
    }

    let region = if offset < TemperatureInterval::ZERO {
        Region::SubCooledLiquid
    } else {
        Region::SuperHeatedVapor
    };
    let properties = backend_state(model, StateInput::PressureTemperature(pressure, temperature))?;
    Ok(ThermoState::single_phase(region, given(properties)))
}

/// Resolves an anchor and quality by interpolating across the dome.
pub(super) fn saturated_mixture<Fluid>(
    model: &impl SteamThermoModel<Fluid>,
    anchor: Anchor,
    quality: Quality,
) -> Result<ThermoState, Failure> {
    let dome = lookup_dome(model, anchor)?.ok_or_else(|| {
        Failure::new(
            "quality lookup",
            PropertyError::OutOfDomain {
                context: "quality is undefined off the saturation curve".to_string(),
            },
        )
    })?;

    let x = quality.into_inner();
    Ok(ThermoState::new(
        Region::from_quality(x),
        dome.mixture(x).with_anchor(anchor),
        x,
    ))
}

/// Resolves an anchor and a bounded property by placing it relative to the dome.
pub(super) fn bounded<Fluid>(
    model: &impl SteamThermoModel<Fluid>,
    anchor: Anchor,
    bound: Bound,
    config: &ResolverConfig,
) -> Result<ThermoState, Failure> {
    let single_phase = |region: Region| -> Result<ThermoState, Failure> {
        let properties = backend_state(model, anchor.with(bound))?;
        Ok(ThermoState::single_phase(
            region,
            properties.with_anchor(anchor).with_bound(bound),
        ))
    };

    let Some(dome) = lookup_dome(model, anchor)? else {
        let properties = backend_state(model, anchor.with(bound))?
            .with_anchor(anchor)
            .with_bound(bound);
        let region = classify_off_dome(model, properties.pressure, properties.temperature)?;
        return Ok(ThermoState::single_phase(region, properties));
    };

    let target = bound.target();
    let liquid = dome.liquid.select(bound);
    let vapor = dome.vapor.select(bound);
    debug!(
        property = %bound.property(),
        target,
        liquid,
        vapor,
        "placing property relative to the dome"
    );

    if config.at_bound(target, liquid) {
        Ok(ThermoState::new(
            Region::Saturated,
            dome.liquid.with_anchor(anchor).with_bound(bound),
            0.0,
        ))
    } else if config.at_bound(target, vapor) {
        Ok(ThermoState::new(
            Region::Saturated,
            dome.vapor.with_anchor(anchor).with_bound(bound),
            1.0,
        ))
    } else if target < liquid {
        single_phase(Region::SubCooledLiquid)
    } else if target > vapor {
        single_phase(Region::SuperHeatedVapor)
    } else {
        let x = dome.quality_of(bound);
        Ok(ThermoState::new(
            Region::TwoPhase,
            dome.mixture(x).with_anchor(anchor).with_bound(bound),
            x,
        ))
    }
}

/// Resolves two bounded properties with the backend, then classifies the result.
///
/// The region follows from the resolved temperature against the saturation
/// temperature at the resolved pressure. States at saturation temperature
/// take their quality from specific volume.
pub(super) fn general<Fluid>(
    model: &impl SteamThermoModel<Fluid>,
    input: StateInput,
    given: [Bound; 2],
    config: &ResolverConfig,
) -> Result<ThermoState, Failure> {
    let properties = backend_state(model, input)?;
    let properties = given
        .into_iter()
        .fold(properties, |properties, bound| properties.with_bound(bound));

    let Some(dome) = lookup_dome(model, Anchor::Pressure(properties.pressure))? else {
        let region = classify_off_dome(model, properties.pressure, properties.temperature)?;
        return Ok(ThermoState::single_phase(region, properties));
    };

    let offset = properties.temperature.minus(dome.saturation_temperature());
    if offset.abs() > config.saturation_temp_tol {
        let region = if offset < TemperatureInterval::ZERO {
            Region::SubCooledLiquid
        } else {
            Region::SuperHeatedVapor
        };
        return Ok(ThermoState::single_phase(region, properties));
    }

    let v = properties.specific_volume.value;
    let v_f = dome.liquid.specific_volume.value;
    let v_g = dome.vapor.specific_volume.value;
    let x = if config.at_bound(v, v_f) || v < v_f {
        0.0
    } else if config.at_bound(v, v_g) || v > v_g {
        1.0
    } else {
        (v - v_f) / (v_g - v_f)
    };
    Ok(ThermoState::new(Region::from_quality(x), properties, x))
}

fn lookup_dome<Fluid>(
    model: &impl SteamThermoModel<Fluid>,
    anchor: Anchor,
) -> Result<Option<Dome>, Failure> {
    Dome::at(model, anchor).map_err(|err| Failure::new("saturation lookup", err))
}

fn classify_off_dome<Fluid>(
    model: &impl SteamThermoModel<Fluid>,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<Region, Failure> {
    let region = off_dome_region(model, pressure, temperature)
        .map_err(|err| Failure::new("saturation limits lookup", err))?;
    debug!(%region, "state is off the saturation curve");
    Ok(region)
}

/// Inverts a property pair with the backend and evaluates the full property set.
fn backend_state<Fluid>(
    model: &impl SteamThermoModel<Fluid>,
    input: StateInput,
) -> Result<Properties, Failure> {
    let state = model
        .state_from(input)
        .map_err(|err| Failure::new(format!("{} state lookup", input.label()), err))?;
    Properties::evaluate(model, &state)
        .map_err(|err| Failure::new(format!("{} property evaluation", input.label()), err))
}
