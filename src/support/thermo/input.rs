use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature};

use crate::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy};

/// A pair of independent properties a backend can build a [`State`](super::State) from.
///
/// Specific internal energy and specific enthalpy share a `uom` dimension,
/// so they cannot be told apart by type alone. Naming the pair in an enum
/// keeps them distinct and lets a backend dispatch at runtime.
///
/// Specific volume is carried as its reciprocal, density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateInput {
    PressureTemperature(Pressure, ThermodynamicTemperature),
    PressureInternalEnergy(Pressure, SpecificInternalEnergy),
    PressureEnthalpy(Pressure, SpecificEnthalpy),
    PressureEntropy(Pressure, SpecificEntropy),
    PressureDensity(Pressure, MassDensity),
    TemperatureInternalEnergy(ThermodynamicTemperature, SpecificInternalEnergy),
    TemperatureEnthalpy(ThermodynamicTemperature, SpecificEnthalpy),
    TemperatureEntropy(ThermodynamicTemperature, SpecificEntropy),
    TemperatureDensity(ThermodynamicTemperature, MassDensity),
    InternalEnergyEntropy(SpecificInternalEnergy, SpecificEntropy),
    InternalEnergyDensity(SpecificInternalEnergy, MassDensity),
    EnthalpyEntropy(SpecificEnthalpy, SpecificEntropy),
    EnthalpyDensity(SpecificEnthalpy, MassDensity),
    EntropyDensity(SpecificEntropy, MassDensity),
}

impl StateInput {
    /// Short label naming the input pair, e.g. `"P-h"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PressureTemperature(..) => "P-T",
            Self::PressureInternalEnergy(..) => "P-u",
            Self::PressureEnthalpy(..) => "P-h",
            Self::PressureEntropy(..) => "P-s",
            Self::PressureDensity(..) => "P-rho",
            Self::TemperatureInternalEnergy(..) => "T-u",
            Self::TemperatureEnthalpy(..) => "T-h",
            Self::TemperatureEntropy(..) => "T-s",
            Self::TemperatureDensity(..) => "T-rho",
            Self::InternalEnergyEntropy(..) => "u-s",
            Self::InternalEnergyDensity(..) => "u-rho",
            Self::EnthalpyEntropy(..) => "h-s",
            Self::EnthalpyDensity(..) => "h-rho",
            Self::EntropyDensity(..) => "s-rho",
        }
    }
}
