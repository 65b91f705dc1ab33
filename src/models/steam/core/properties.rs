//! Property sets evaluated from backend states.

use tracing::trace;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Pressure, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::{
    thermo::{PropertyError, State},
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy, SpecificVolume},
};

use super::{
    Region,
    dispatch::{Anchor, Bound},
    traits::SteamThermoModel,
};

/// Every property of a state except region and quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Properties {
    pub(super) pressure: Pressure,
    pub(super) temperature: ThermodynamicTemperature,
    pub(super) internal_energy: SpecificInternalEnergy,
    pub(super) enthalpy: SpecificEnthalpy,
    pub(super) entropy: SpecificEntropy,
    pub(super) specific_volume: SpecificVolume,
}

impl Properties {
    pub(super) fn evaluate<Fluid>(
        model: &impl SteamThermoModel<Fluid>,
        state: &State<Fluid>,
    ) -> Result<Self, PropertyError> {
        Ok(Self {
            pressure: model.pressure(state)?,
            temperature: state.temperature,
            internal_energy: model.internal_energy(state)?,
            enthalpy: model.enthalpy(state)?,
            entropy: model.entropy(state)?,
            specific_volume: state.specific_volume(),
        })
    }

    /// Linear interpolation by quality between saturated liquid and vapor.
    pub(super) fn interpolate(liquid: &Self, vapor: &Self, quality: f64) -> Self {
        Self {
            pressure: liquid.pressure,
            temperature: liquid.temperature,
            internal_energy: liquid.internal_energy
                + (vapor.internal_energy - liquid.internal_energy) * quality,
            enthalpy: liquid.enthalpy + (vapor.enthalpy - liquid.enthalpy) * quality,
            entropy: liquid.entropy + (vapor.entropy - liquid.entropy) * quality,
            specific_volume: liquid.specific_volume
                + (vapor.specific_volume - liquid.specific_volume) * quality,
        }
    }

    /// Value of the bounded property in SI base units.
    pub(super) fn select(&self, bound: Bound) -> f64 {
        match bound {
            Bound::InternalEnergy(_) => self.internal_energy.get::<joule_per_kilogram>(),
            Bound::Enthalpy(_) => self.enthalpy.get::<joule_per_kilogram>(),
            Bound::Entropy(_) => self.entropy.get::<joule_per_kilogram_kelvin>(),
            Bound::SpecificVolume(_) => self.specific_volume.value,
        }
    }

    /// Replaces the anchor property with its given value.
    pub(super) fn with_anchor(mut self, anchor: Anchor) -> Self {
        match anchor {
            Anchor::Pressure(p) => self.pressure = p,
            Anchor::Temperature(t) => self.temperature = t,
        }
        self
    }

    /// Replaces the bounded property with its given value.
    pub(super) fn with_bound(mut self, bound: Bound) -> Self {
        match bound {
            Bound::InternalEnergy(u) => self.internal_energy = u,
            Bound::Enthalpy(h) => self.enthalpy = h,
            Bound::Entropy(s) => self.entropy = s,
            Bound::SpecificVolume(v) => self.specific_volume = v,
        }
        self
    }
}

/// Saturated liquid and vapor properties at one point on the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Dome {
    pub(super) liquid: Properties,
    pub(super) vapor: Properties,
}

impl Dome {
    /// Looks up the dome at an anchor.
    ///
    /// Returns `None` when the anchor lies off the saturation curve, either
    /// below the triple point or at or above the critical point.
    pub(super) fn at<Fluid>(
        model: &impl SteamThermoModel<Fluid>,
        anchor: Anchor,
    ) -> Result<Option<Self>, PropertyError> {
        let limits = model.saturation_limits()?;
        let on_curve = match anchor {
            Anchor::Pressure(p) => (limits.triple_pressure..limits.critical_pressure).contains(&p),
            Anchor::Temperature(t) => {
                (limits.triple_temperature..limits.critical_temperature).contains(&t)
            }
        };
        if !on_curve {
            trace!(?anchor, "anchor is off the saturation curve");
            return Ok(None);
        }

        let saturation = match anchor {
            Anchor::Pressure(p) => model.saturation_at_pressure(p)?,
            Anchor::Temperature(t) => model.saturation_at_temperature(t)?,
        };
        trace!(
            pressure = ?saturation.pressure,
            temperature = ?saturation.temperature,
            "saturation lookup"
        );
        Self::from_saturation(model, &saturation.liquid, &saturation.vapor)
            .map(|dome| Some(dome.on_curve(saturation.pressure, saturation.temperature)))
    }

    /// Looks up the dome at a saturation temperature known to be subcritical.
    pub(super) fn at_temperature<Fluid>(
        model: &impl SteamThermoModel<Fluid>,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, PropertyError> {
        let saturation = model.saturation_at_temperature(temperature)?;
        Self::from_saturation(model, &saturation.liquid, &saturation.vapor)
            .map(|dome| dome.on_curve(saturation.pressure, saturation.temperature))
    }

    fn from_saturation<Fluid>(
        model: &impl SteamThermoModel<Fluid>,
        liquid: &State<Fluid>,
        vapor: &State<Fluid>,
    ) -> Result<Self, PropertyError> {
        Ok(Self {
            liquid: Properties::evaluate(model, liquid)?,
            vapor: Properties::evaluate(model, vapor)?,
        })
    }

    /// Pins both ends to the saturation pressure and temperature.
    fn on_curve(mut self, pressure: Pressure, temperature: ThermodynamicTemperature) -> Self {
        for end in [&mut self.liquid, &mut self.vapor] {
            end.pressure = pressure;
            end.temperature = temperature;
        }
        self
    }

    pub(super) fn saturation_temperature(&self) -> ThermodynamicTemperature {
        self.liquid.temperature
    }

    pub(super) fn mixture(&self, quality: f64) -> Properties {
        Properties::interpolate(&self.liquid, &self.vapor, quality)
    }

    /// Quality at which the mixture takes the bound's value.
    pub(super) fn quality_of(&self, bound: Bound) -> f64 {
        let liquid = self.liquid.select(bound);
        let vapor = self.vapor.select(bound);
        (bound.target() - liquid) / (vapor - liquid)
    }
}

/// Region of a single-phase state off the saturation curve.
///
/// At or above the critical temperature the state is vapor. At or above the
/// critical pressure below that temperature it is liquid. Below the triple
/// point pressure there is no liquid, so the state is vapor. What remains is
/// liquid colder than the triple point.
pub(super) fn off_dome_region<Fluid>(
    model: &impl SteamThermoModel<Fluid>,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<Region, PropertyError> {
    let limits = model.saturation_limits()?;
    Ok(if temperature >= limits.critical_temperature {
        Region::SuperHeatedVapor
    } else if pressure >= limits.critical_pressure {
        Region::SubCooledLiquid
    } else if pressure < limits.triple_pressure {
        Region::SuperHeatedVapor
    } else {
        Region::SubCooledLiquid
    })
}
