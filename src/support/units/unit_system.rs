use std::fmt;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, Pressure, TemperatureInterval, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::bar,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
};

use super::{SpecificEnthalpy, SpecificEntropy, SpecificVolume, convert};

/// The unit system raw caller numbers are expressed in.
///
/// | Measure          | [`UnitSystem::Si`] | [`UnitSystem::English`] |
/// |------------------|--------------------|-------------------------|
/// | pressure         | bar                | psi                     |
/// | temperature      | °C                 | °F                      |
/// | energy, enthalpy | kJ/kg              | btu/lb                  |
/// | entropy          | kJ/kg·K            | btu/lb·°F               |
/// | specific volume  | m³/kg              | ft³/lb                  |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    #[default]
    Si,
    English,
}

/// The physical measure a raw number represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Pressure,
    Temperature,
    /// A temperature difference, converted without the Fahrenheit offset.
    TemperatureInterval,
    /// Specific internal energy or specific enthalpy.
    SpecificEnergy,
    SpecificEntropy,
    SpecificVolume,
    Dimensionless,
}

impl Measure {
    /// Converts an SI-table value (bar, °C, kJ/kg, ...) to English units.
    #[must_use]
    pub fn to_english(self, value: f64) -> f64 {
        match self {
            Self::Pressure => convert::bar_to_psi(value),
            Self::Temperature => convert::celsius_to_fahrenheit(value),
            Self::TemperatureInterval => convert::delta_celsius_to_fahrenheit(value),
            Self::SpecificEnergy => convert::kj_per_kg_to_btu_per_lb(value),
            Self::SpecificEntropy => convert::kj_per_kg_k_to_btu_per_lb_f(value),
            Self::SpecificVolume => convert::m3_per_kg_to_ft3_per_lb(value),
            Self::Dimensionless => value,
        }
    }

    /// Converts an English-unit value to SI-table units (bar, °C, kJ/kg, ...).
    #[must_use]
    pub fn to_si(self, value: f64) -> f64 {
        match self {
            Self::Pressure => convert::psi_to_bar(value),
            Self::Temperature => convert::fahrenheit_to_celsius(value),
            Self::TemperatureInterval => convert::delta_fahrenheit_to_celsius(value),
            Self::SpecificEnergy => convert::btu_per_lb_to_kj_per_kg(value),
            Self::SpecificEntropy => convert::btu_per_lb_f_to_kj_per_kg_k(value),
            Self::SpecificVolume => convert::ft3_per_lb_to_m3_per_kg(value),
            Self::Dimensionless => value,
        }
    }
}

impl UnitSystem {
    /// Converts a value expressed in this unit system to SI-table units.
    #[must_use]
    pub fn to_si(self, measure: Measure, value: f64) -> f64 {
        match self {
            Self::Si => value,
            Self::English => measure.to_si(value),
        }
    }

    /// Converts a value in SI-table units to this unit system.
    #[must_use]
    pub fn from_si(self, measure: Measure, value: f64) -> f64 {
        match self {
            Self::Si => value,
            Self::English => measure.to_english(value),
        }
    }

    /// Interprets a raw number as a pressure in this unit system.
    #[must_use]
    pub fn pressure(self, value: f64) -> Pressure {
        Pressure::new::<bar>(self.to_si(Measure::Pressure, value))
    }

    /// Interprets a raw number as a temperature in this unit system.
    #[must_use]
    pub fn temperature(self, value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.to_si(Measure::Temperature, value))
    }

    /// Interprets a raw number as a specific energy (internal energy or enthalpy).
    #[must_use]
    pub fn specific_energy(self, value: f64) -> SpecificEnthalpy {
        SpecificEnthalpy::new::<kilojoule_per_kilogram>(self.to_si(Measure::SpecificEnergy, value))
    }

    /// Interprets a raw number as a specific entropy in this unit system.
    #[must_use]
    pub fn specific_entropy(self, value: f64) -> SpecificEntropy {
        SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(
            self.to_si(Measure::SpecificEntropy, value),
        )
    }

    /// Interprets a raw number as a specific volume and returns the matching density.
    ///
    /// Thermo models work with density, so specific volume is carried as its reciprocal.
    #[must_use]
    pub fn density_from_specific_volume(self, value: f64) -> MassDensity {
        let v = self.to_si(Measure::SpecificVolume, value);
        MassDensity::new::<kilogram_per_cubic_meter>(v.recip())
    }

    #[must_use]
    pub fn pressure_value(self, pressure: Pressure) -> f64 {
        self.from_si(Measure::Pressure, pressure.get::<bar>())
    }

    #[must_use]
    pub fn temperature_value(self, temperature: ThermodynamicTemperature) -> f64 {
        self.from_si(Measure::Temperature, temperature.get::<degree_celsius>())
    }

    #[must_use]
    pub fn temperature_interval_value(self, interval: TemperatureInterval) -> f64 {
        self.from_si(Measure::TemperatureInterval, interval.get::<delta_celsius>())
    }

    #[must_use]
    pub fn specific_energy_value(self, energy: SpecificEnthalpy) -> f64 {
        self.from_si(Measure::SpecificEnergy, energy.get::<kilojoule_per_kilogram>())
    }

    #[must_use]
    pub fn specific_entropy_value(self, entropy: SpecificEntropy) -> f64 {
        self.from_si(
            Measure::SpecificEntropy,
            entropy.get::<kilojoule_per_kilogram_kelvin>(),
        )
    }

    #[must_use]
    pub fn specific_volume_value(self, volume: SpecificVolume) -> f64 {
        // `value` is stored in SI base units, which are already m³/kg.
        self.from_si(Measure::SpecificVolume, volume.value)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Si => write!(f, "SI"),
            Self::English => write!(f, "English"),
        }
    }
}
