//! Internal traits for steam state resolution.

use crate::support::thermo::{
    StateInput,
    capability::{
        HasEnthalpy, HasEntropy, HasInternalEnergy, HasPressure, HasSaturation, StateFrom,
        ThermoModel,
    },
};

/// Required thermo model bounds for resolving steam states.
#[doc(hidden)]
pub trait SteamThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasPressure
    + HasInternalEnergy
    + HasEnthalpy
    + HasEntropy
    + HasSaturation
    + StateFrom<StateInput>
{
}

impl<Fluid, T> SteamThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasPressure
        + HasInternalEnergy
        + HasEnthalpy
        + HasEntropy
        + HasSaturation
        + StateFrom<StateInput>
{
}
