use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a known input.
///
/// Most steam calculations start from two measured properties rather than
/// from temperature and density. `StateFrom<Input>` expresses which inputs a
/// model can invert to a state.
///
/// Property backends used by the steam resolver implement
/// `StateFrom<StateInput>` (see [`StateInput`](crate::support::thermo::StateInput)),
/// because the input pair is only known at runtime. A backend that cannot
/// invert a particular pair returns an error for that variant.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}
