use uom::si::f64::{MassDensity, ThermodynamicTemperature};

use crate::support::units::SpecificVolume;

/// The thermodynamic state of a fluid.
///
/// Temperature and density fully define the equilibrium state of a pure
/// fluid, on either side of the saturation dome and inside it.
/// Property backends build a `State` from whatever pair the caller knows
/// (see [`StateInput`](super::StateInput)) and evaluate every other
/// property from it.
///
/// # Example
///
/// ```
/// use steam_states::support::thermo::{State, fluid::Water};
/// use uom::si::{
///     f64::{MassDensity, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<degree_celsius>(25.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(997.0),
///     Water,
/// );
/// assert!(state.specific_volume().value < 1.01e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }

    /// Returns the specific volume, the reciprocal of density.
    #[must_use]
    pub fn specific_volume(&self) -> SpecificVolume {
        self.density.recip()
    }
}
