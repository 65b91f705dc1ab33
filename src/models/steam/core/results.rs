//! Result types for resolved steam states.

use uom::si::f64::{Pressure, TemperatureInterval, ThermodynamicTemperature};

use crate::support::units::{
    SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy, SpecificVolume,
    TemperatureDifference, UnitSystem,
};

use super::{PropertyId, Region, properties::Properties};

/// Quality reported for single-phase states away from saturation.
pub const SINGLE_PHASE_QUALITY: f64 = -1.0;

/// A fully resolved equilibrium state of water or steam.
///
/// Every property is populated. Properties the caller supplied are reported
/// exactly as given, after unit conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoState {
    pub region: Region,
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub internal_energy: SpecificInternalEnergy,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,
    pub specific_volume: SpecificVolume,

    /// Vapor mass fraction.
    ///
    /// 0 for saturated liquid, 1 for saturated vapor, and
    /// [`SINGLE_PHASE_QUALITY`] for sub-cooled liquid and super-heated vapor.
    pub quality: f64,
}

impl ThermoState {
    pub(super) fn new(region: Region, properties: Properties, quality: f64) -> Self {
        Self {
            region,
            pressure: properties.pressure,
            temperature: properties.temperature,
            internal_energy: properties.internal_energy,
            enthalpy: properties.enthalpy,
            entropy: properties.entropy,
            specific_volume: properties.specific_volume,
            quality,
        }
    }

    /// Builds a single-phase state, which carries the quality sentinel.
    pub(super) fn single_phase(region: Region, properties: Properties) -> Self {
        debug_assert!(region.is_single_phase(), "{region} has a quality");
        Self::new(region, properties, SINGLE_PHASE_QUALITY)
    }

    /// Renders every property as a plain number in `units`.
    #[must_use]
    pub fn values(&self, units: UnitSystem) -> PropertyValues {
        PropertyValues {
            pressure: units.pressure_value(self.pressure),
            temperature: units.temperature_value(self.temperature),
            internal_energy: units.specific_energy_value(self.internal_energy),
            enthalpy: units.specific_energy_value(self.enthalpy),
            entropy: units.specific_entropy_value(self.entropy),
            specific_volume: units.specific_volume_value(self.specific_volume),
            quality: self.quality,
        }
    }
}

/// Property values as plain numbers in one [`UnitSystem`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyValues {
    pub pressure: f64,
    pub temperature: f64,
    pub internal_energy: f64,
    pub enthalpy: f64,
    pub entropy: f64,
    pub specific_volume: f64,
    pub quality: f64,
}

impl PropertyValues {
    /// Returns the value of one property.
    #[must_use]
    pub fn get(&self, property: PropertyId) -> f64 {
        match property {
            PropertyId::Pressure => self.pressure,
            PropertyId::Temperature => self.temperature,
            PropertyId::InternalEnergy => self.internal_energy,
            PropertyId::Enthalpy => self.enthalpy,
            PropertyId::Entropy => self.entropy,
            PropertyId::SpecificVolume => self.specific_volume,
            PropertyId::Quality => self.quality,
        }
    }
}

/// Property change from one state to another (`second - first`).
///
/// The quality change is a plain difference, so it includes the
/// [`SINGLE_PHASE_QUALITY`] sentinel when either state is single-phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateChange {
    pub pressure: Pressure,
    pub temperature: TemperatureInterval,
    pub internal_energy: SpecificInternalEnergy,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,
    pub specific_volume: SpecificVolume,
    pub quality: f64,
}

impl StateChange {
    /// Computes the change from `first` to `second`.
    #[must_use]
    pub fn between(first: &ThermoState, second: &ThermoState) -> Self {
        Self {
            pressure: second.pressure - first.pressure,
            temperature: second.temperature.minus(first.temperature),
            internal_energy: second.internal_energy - first.internal_energy,
            enthalpy: second.enthalpy - first.enthalpy,
            entropy: second.entropy - first.entropy,
            specific_volume: second.specific_volume - first.specific_volume,
            quality: second.quality - first.quality,
        }
    }

    /// Renders every change as a plain number in `units`.
    ///
    /// The temperature change is an interval, so no Fahrenheit offset applies.
    #[must_use]
    pub fn values(&self, units: UnitSystem) -> PropertyValues {
        PropertyValues {
            pressure: units.pressure_value(self.pressure),
            temperature: units.temperature_interval_value(self.temperature),
            internal_energy: units.specific_energy_value(self.internal_energy),
            enthalpy: units.specific_energy_value(self.enthalpy),
            entropy: units.specific_entropy_value(self.entropy),
            specific_volume: units.specific_volume_value(self.specific_volume),
            quality: self.quality,
        }
    }
}
