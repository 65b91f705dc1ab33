use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::thermo::{PropertyError, State};

use super::ThermoModel;

/// Saturated liquid and saturated vapor at one point on the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saturation<Fluid> {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,

    /// Saturated liquid (quality 0).
    pub liquid: State<Fluid>,

    /// Saturated vapor (quality 1).
    pub vapor: State<Fluid>,
}

/// Ends of the saturation curve.
///
/// Saturation lookups are valid from the triple point up to, but not
/// including, the critical point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationLimits {
    pub triple_temperature: ThermodynamicTemperature,
    pub triple_pressure: Pressure,
    pub critical_temperature: ThermodynamicTemperature,
    pub critical_pressure: Pressure,
}

/// Capability for evaluating the liquid-vapor saturation curve.
pub trait HasSaturation: ThermoModel {
    /// Returns the triple and critical point limits of the saturation curve.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the limits cannot be queried.
    fn saturation_limits(&self) -> Result<SaturationLimits, PropertyError>;

    /// Returns the saturated liquid and vapor states at the given pressure.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if the pressure is outside the
    /// saturation curve, or another [`PropertyError`] if the lookup fails.
    fn saturation_at_pressure(
        &self,
        pressure: Pressure,
    ) -> Result<Saturation<Self::Fluid>, PropertyError>;

    /// Returns the saturated liquid and vapor states at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if the temperature is outside the
    /// saturation curve, or another [`PropertyError`] if the lookup fails.
    fn saturation_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Saturation<Self::Fluid>, PropertyError>;
}
